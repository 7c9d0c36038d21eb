//! Error taxonomy for camp operations.
//!
//! Every fallible constructor and operation in this crate returns
//! `Result<_, CampError>`. Errors are synchronous and local to the
//! failing call; no operation leaves partial state behind.

/// Errors from entity construction, mutation and camp operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CampError {
    /// Name was empty at construction.
    #[error("Name cannot be an empty string")]
    EmptyName,

    /// Supply energy below zero.
    #[error("Energy cannot be less than zero (got {0})")]
    NegativeEnergy(f64),

    /// Player younger than the minimum age.
    #[error("Players must be at least 12 years old (got {0})")]
    UnderAge(u32),

    /// Stamina outside the valid 0..=100 range.
    #[error("Stamina must be between 0 and 100 (got {0})")]
    StaminaOutOfRange(f64),

    /// Player name already reserved in the registry.
    #[error("Name {0} is already used")]
    DuplicateName(String),

    /// No enrolled player carries this name.
    #[error("No player named {0}")]
    UnknownPlayer(String),
}
