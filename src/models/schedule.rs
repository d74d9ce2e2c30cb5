//! Round, Schedule, and the scheduling error taxonomy.

use crate::models::Fixture;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors for malformed participant input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidInputError {
    /// The participant list was empty.
    NoParticipants,
    /// The participant count was odd; a full round needs everyone paired.
    OddParticipantCount(usize),
    /// A participant name was empty after trimming.
    EmptyName,
    /// Two participants share the same display name.
    DuplicateName(String),
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::NoParticipants => write!(f, "No participants were supplied"),
            InvalidInputError::OddParticipantCount(n) => {
                write!(f, "Participant count must be even (got {})", n)
            }
            InvalidInputError::EmptyName => write!(f, "Participant name cannot be empty"),
            InvalidInputError::DuplicateName(name) => {
                write!(f, "Duplicate participant name: {}", name)
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Errors raised while assembling rounds from the candidate pool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleGenerationError {
    /// No remaining candidate pairing fit the round: every unused pairing
    /// involves a participant already scheduled in it.
    DeadEnd { round: usize, slot: usize },
    /// The first half did not consume the candidate pool exactly.
    FixtureCountMismatch { expected: usize, consumed: usize },
}

impl fmt::Display for ScheduleGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleGenerationError::DeadEnd { round, slot } => {
                write!(
                    f,
                    "No eligible pairing left for round {} slot {}",
                    round, slot
                )
            }
            ScheduleGenerationError::FixtureCountMismatch { expected, consumed } => {
                write!(
                    f,
                    "Expected to consume {} pairings but consumed {}",
                    expected, consumed
                )
            }
        }
    }
}

impl std::error::Error for ScheduleGenerationError {}

/// Any failure of a single generation attempt. Both cases are fatal to the
/// attempt; retrying with fresh randomness is the caller's decision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    InvalidInput(InvalidInputError),
    Generation(ScheduleGenerationError),
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::InvalidInput(err) => err.fmt(f),
            ScheduleError::Generation(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::InvalidInput(err) => Some(err),
            ScheduleError::Generation(err) => Some(err),
        }
    }
}

impl From<InvalidInputError> for ScheduleError {
    fn from(err: InvalidInputError) -> Self {
        ScheduleError::InvalidInput(err)
    }
}

impl From<ScheduleGenerationError> for ScheduleError {
    fn from(err: ScheduleGenerationError) -> Self {
        ScheduleError::Generation(err)
    }
}

/// One round of games, in slot order (slot number = position + 1).
///
/// Within a round every participant appears in exactly one fixture.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    fixtures: Vec<Fixture>,
}

impl Round {
    pub(crate) fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Iterate fixtures with their 1-based slot numbers.
    pub fn slots(&self) -> impl Iterator<Item = (usize, &Fixture)> {
        self.fixtures.iter().enumerate().map(|(i, fx)| (i + 1, fx))
    }
}

/// A complete double round-robin schedule (round number = position + 1).
///
/// Built once by the schedule builder and only read afterwards: 2(N−1)
/// rounds of N/2 games, every pair meeting twice with designations
/// reversed between halves.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    pub(crate) fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Iterate rounds with their 1-based round numbers.
    pub fn numbered_rounds(&self) -> impl Iterator<Item = (usize, &Round)> {
        self.rounds.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    pub fn total_fixtures(&self) -> usize {
        self.rounds.iter().map(|r| r.fixtures.len()).sum()
    }
}

impl fmt::Display for Schedule {
    /// Text rendering: `Round {r}` headers (blank line before each except
    /// the first) followed by `{slot}ᵒ game: {home} x {away}` lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (number, round) in self.numbered_rounds() {
            if number > 1 {
                f.write_str("\n")?;
            }
            writeln!(f, "Round {}", number)?;
            for (slot, fixture) in round.slots() {
                writeln!(f, "{}ᵒ game: {}", slot, fixture)?;
            }
        }
        Ok(())
    }
}
