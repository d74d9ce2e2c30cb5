//! Data structures for the championship: participants, fixtures, rounds, errors.

mod fixture;
mod participant;
mod schedule;

pub use fixture::{Fixture, Pairing};
pub use participant::Participant;
pub use schedule::{InvalidInputError, Round, Schedule, ScheduleError, ScheduleGenerationError};
