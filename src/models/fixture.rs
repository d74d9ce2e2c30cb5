//! Pairing (canonical unordered pair) and Fixture (oriented game).

use crate::models::Participant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered pair of distinct participants, stored in lexicographic
/// order so that (A, B) and (B, A) collapse to the same value.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    first: Participant,
    second: Participant,
}

impl Pairing {
    /// Canonical pairing of two participants; argument order does not
    /// matter. Callers must pass distinct participants.
    pub fn new(a: Participant, b: Participant) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> &Participant {
        &self.first
    }

    pub fn second(&self) -> &Participant {
        &self.second
    }

    /// Orient the pairing into a fixture: `first_home` decides which side
    /// hosts this meeting.
    pub fn into_fixture(self, first_home: bool) -> Fixture {
        if first_home {
            Fixture {
                home: self.first,
                away: self.second,
            }
        } else {
            Fixture {
                home: self.second,
                away: self.first,
            }
        }
    }
}

/// A single scheduled game: two participants with a home designation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub home: Participant,
    pub away: Participant,
}

impl Fixture {
    /// The same game with home and away swapped (the return leg).
    pub fn mirrored(&self) -> Fixture {
        Fixture {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.home, self.away)
    }
}
