//! Participant data structure.

use crate::models::InvalidInputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A competition participant, identified by its display name.
///
/// Immutable after creation. The derived ordering (lexicographic by name)
/// exists only to build canonical pairings and detect duplicates, not to
/// rank participants.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant {
    name: String,
}

impl Participant {
    /// Create a participant with the given display name. The name is
    /// trimmed; an empty result is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidInputError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(InvalidInputError::EmptyName);
        }
        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
