//! Scheduling logic: candidate enumeration and round construction.

mod builder;
mod universe;

pub use builder::{build_schedule, generate_schedule, generate_schedule_with};
pub use universe::enumerate_pairings;
