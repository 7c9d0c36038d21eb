//! Camp players and their stamina.

use std::fmt;

use serde::Serialize;

use crate::error::CampError;
use crate::registry::NameRegistry;

/// A camp participant with a registry-unique name.
///
/// Stamina always sits in `0..=MAX_STAMINA`; the constructor and
/// [`Player::set_stamina`] both enforce the bound, so no code path can
/// observe a player outside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    name: String,
    age: u32,
    stamina: f64,
}

impl Player {
    /// Upper stamina bound; players start here unless told otherwise.
    pub const MAX_STAMINA: f64 = 100.0;
    /// Youngest age admitted to the camp.
    pub const MIN_AGE: u32 = 12;

    /// Validated constructor; `stamina` of `None` starts at full.
    ///
    /// The name is reserved in `registry` only after every field check
    /// passes, so a rejected player does not burn its name. Reservation
    /// itself fails with [`CampError::DuplicateName`] on a reuse.
    pub fn new(
        registry: &mut NameRegistry,
        name: impl Into<String>,
        age: u32,
        stamina: Option<f64>,
    ) -> Result<Self, CampError> {
        let name = name.into();
        let stamina = stamina.unwrap_or(Self::MAX_STAMINA);
        if name.is_empty() {
            return Err(CampError::EmptyName);
        }
        if age < Self::MIN_AGE {
            return Err(CampError::UnderAge(age));
        }
        if !(0.0..=Self::MAX_STAMINA).contains(&stamina) {
            return Err(CampError::StaminaOutOfRange(stamina));
        }
        registry.reserve(&name)?;
        Ok(Self { name, age, stamina })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn stamina(&self) -> f64 {
        self.stamina
    }

    /// Replace stamina, re-validating the `0..=100` bound.
    ///
    /// Never clamps; callers that want saturation clamp before calling.
    pub fn set_stamina(&mut self, value: f64) -> Result<(), CampError> {
        if !(0.0..=Self::MAX_STAMINA).contains(&value) {
            return Err(CampError::StaminaOutOfRange(value));
        }
        self.stamina = value;
        Ok(())
    }

    /// True while stamina sits below the maximum.
    pub fn needs_sustenance(&self) -> bool {
        self.stamina < Self::MAX_STAMINA
    }
}

impl fmt::Display for Player {
    /// Roster line, e.g. `Player: Peter, 15, 100, false`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player: {}, {}, {}, {}",
            self.name,
            self.age,
            self.stamina,
            self.needs_sustenance()
        )
    }
}
