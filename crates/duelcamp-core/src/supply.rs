//! Camp supplies: food and drink.
//!
//! A supply is a validated name/energy/kind triple, immutable once
//! constructed and consumed whole during sustenance. Food carries a
//! caller-chosen energy value (default 25); drink always restores 15
//! and exposes no way to change that.

use std::fmt;

use serde::Serialize;

use crate::error::CampError;

/// Supply category tag. All kind-specific behavior dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SupplyKind {
    Food,
    Drink,
}

impl SupplyKind {
    /// Label used in supply detail lines.
    pub fn label(self) -> &'static str {
        match self {
            SupplyKind::Food => "Food",
            SupplyKind::Drink => "Drink",
        }
    }
}

impl fmt::Display for SupplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A consumable supply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supply {
    name: String,
    /// Stamina restored when consumed. Finite and never negative.
    energy: f64,
    kind: SupplyKind,
}

impl Supply {
    /// Energy a food supply restores when the caller picks none.
    pub const DEFAULT_FOOD_ENERGY: f64 = 25.0;
    /// Energy every drink supply restores.
    pub const DRINK_ENERGY: f64 = 15.0;

    /// Food supply; `None` energy falls back to [`Self::DEFAULT_FOOD_ENERGY`].
    pub fn food(name: impl Into<String>, energy: Option<f64>) -> Result<Self, CampError> {
        Self::build(
            name.into(),
            energy.unwrap_or(Self::DEFAULT_FOOD_ENERGY),
            SupplyKind::Food,
        )
    }

    /// Drink supply; energy is fixed at [`Self::DRINK_ENERGY`].
    pub fn drink(name: impl Into<String>) -> Result<Self, CampError> {
        Self::build(name.into(), Self::DRINK_ENERGY, SupplyKind::Drink)
    }

    fn build(name: String, energy: f64, kind: SupplyKind) -> Result<Self, CampError> {
        if name.is_empty() {
            return Err(CampError::EmptyName);
        }
        if !energy.is_finite() || energy < 0.0 {
            return Err(CampError::NegativeEnergy(energy));
        }
        Ok(Self { name, energy, kind })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn kind(&self) -> SupplyKind {
        self.kind
    }
}

impl fmt::Display for Supply {
    /// Detail line, e.g. `Food: apple, 22`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}, {}", self.kind.label(), self.name, self.energy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_default_energy() {
        let cheese = Supply::food("cheese", None).unwrap();
        assert_eq!(cheese.energy(), 25.0);
        assert_eq!(cheese.kind(), SupplyKind::Food);
    }

    #[test]
    fn test_food_explicit_energy() {
        let apple = Supply::food("apple", Some(22.0)).unwrap();
        assert_eq!(apple.energy(), 22.0);
    }

    #[test]
    fn test_drink_energy_is_fixed() {
        let water = Supply::drink("water").unwrap();
        assert_eq!(water.energy(), 15.0);
        assert_eq!(water.kind(), SupplyKind::Drink);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Supply::food("", None), Err(CampError::EmptyName));
        assert_eq!(Supply::drink(""), Err(CampError::EmptyName));
    }

    #[test]
    fn test_negative_energy_rejected() {
        assert_eq!(
            Supply::food("rot", Some(-1.0)),
            Err(CampError::NegativeEnergy(-1.0))
        );
    }

    #[test]
    fn test_non_finite_energy_rejected() {
        assert!(Supply::food("rot", Some(f64::NAN)).is_err());
        assert_eq!(
            Supply::food("lava", Some(f64::INFINITY)),
            Err(CampError::NegativeEnergy(f64::INFINITY))
        );
    }

    #[test]
    fn test_zero_energy_allowed() {
        let celery = Supply::food("celery", Some(0.0)).unwrap();
        assert_eq!(celery.energy(), 0.0);
    }

    #[test]
    fn test_detail_line() {
        let apple = Supply::food("apple", Some(22.0)).unwrap();
        assert_eq!(apple.to_string(), "Food: apple, 22");
        let juice = Supply::drink("orange juice").unwrap();
        assert_eq!(juice.to_string(), "Drink: orange juice, 15");
    }
}
