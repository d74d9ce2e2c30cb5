//! Double round-robin championship scheduler: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{build_schedule, enumerate_pairings, generate_schedule, generate_schedule_with};
pub use models::{
    Fixture, InvalidInputError, Pairing, Participant, Round, Schedule, ScheduleError,
    ScheduleGenerationError,
};
