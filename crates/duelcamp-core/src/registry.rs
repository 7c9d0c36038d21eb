//! Player-name reservation registry.
//!
//! Name uniqueness is scoped to a registry instance instead of the
//! whole process: whoever assembles a camp owns a `NameRegistry` and
//! threads it through player construction. A fresh registry per test
//! (or per camp) resets the namespace; within one registry a
//! reservation is permanent.

use std::collections::HashSet;

use crate::error::CampError;

/// Reservation set for player names.
///
/// `reserve` is the only way in. There is no release path, so a
/// discarded `Player` keeps blocking its name for the registry's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name`, failing if it is already taken.
    pub fn reserve(&mut self, name: &str) -> Result<(), CampError> {
        if self.names.contains(name) {
            return Err(CampError::DuplicateName(name.to_string()));
        }
        self.names.insert(name.to_string());
        Ok(())
    }

    /// Whether `name` has been reserved.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of reserved names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when nothing has been reserved yet.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
