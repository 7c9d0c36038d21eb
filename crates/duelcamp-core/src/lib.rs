//! Pure camp-simulation logic for DuelCamp.
//!
//! A deterministic, single-threaded, in-memory rule engine: players
//! with stamina consume food and drink supplies, duel one another with
//! a fixed stamina-exchange rule, and pass through daily decay. No
//! randomness, no I/O, no clocks; every operation is a plain method
//! call whose result is fully determined by prior calls.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`controller`] | Camp orchestration: roster, larder, sustain/duel/day cycle |
//! | [`error`] | `CampError` taxonomy for all fallible calls |
//! | [`player`] | Validated players with bounded stamina |
//! | [`registry`] | Scoped player-name uniqueness registry |
//! | [`supply`] | Food/drink supplies and their energy values |
//!
//! # Example
//!
//! ```rust
//! use duelcamp_core::prelude::*;
//!
//! let mut names = NameRegistry::new();
//! let mut camp = Controller::new();
//! camp.add_players([
//!     Player::new(&mut names, "Peter", 15, None).unwrap(),
//!     Player::new(&mut names, "Lilly", 12, Some(94.0)).unwrap(),
//! ]);
//! camp.add_supplies([Supply::drink("water").unwrap()]);
//!
//! let outcome = camp.duel("Peter", "Lilly").unwrap();
//! assert_eq!(outcome.to_string(), "Winner: Lilly");
//! camp.next_day();
//! ```

pub mod controller;
pub mod error;
pub mod player;
pub mod registry;
pub mod supply;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::controller::{Controller, DuelOutcome, SustainOutcome};
    pub use crate::error::CampError;
    pub use crate::player::Player;
    pub use crate::registry::NameRegistry;
    pub use crate::supply::{Supply, SupplyKind};
}
