//! Schedule builder: partitions the fixture universe into rounds.

use crate::logic::universe::{enumerate_pairings, validate_participants};
use crate::models::{
    Fixture, Pairing, Participant, Round, Schedule, ScheduleError, ScheduleGenerationError,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Generate a full double round-robin schedule using thread-local randomness.
///
/// One attempt per call; see [`build_schedule`] for the failure modes.
pub fn generate_schedule(participants: &[Participant]) -> Result<Schedule, ScheduleError> {
    generate_schedule_with(participants, &mut rand::thread_rng())
}

/// Generate a full double round-robin schedule with a caller-supplied rng.
/// Seed the rng for reproducible schedules.
pub fn generate_schedule_with<R: Rng>(
    participants: &[Participant],
    rng: &mut R,
) -> Result<Schedule, ScheduleError> {
    let candidates = enumerate_pairings(participants)?;
    build_schedule(participants, candidates, rng)
}

/// Partition `candidates` into 2(N−1) rounds of N/2 oriented fixtures.
///
/// `candidates` must be the enumeration of `participants` (one canonical
/// pairing per unordered pair).
///
/// First half (rounds 1..=N−1): per round, repeatedly draw a uniformly
/// random pairing whose participants are both still free in that round,
/// orienting each with an independent coin flip. The draw is greedy with no
/// backtracking, so it can dead-end; that is reported as an error and never
/// retried here. Second half: each first-half round mirrors into round
/// (N−1)+r with every designation reversed and slots reshuffled.
pub fn build_schedule<R: Rng>(
    participants: &[Participant],
    candidates: Vec<Pairing>,
    rng: &mut R,
) -> Result<Schedule, ScheduleError> {
    validate_participants(participants)?;

    let n = participants.len();
    let rounds_per_half = n - 1;
    let games_per_round = n / 2;
    let universe_size = n * (n - 1) / 2;
    let pool_size = candidates.len();

    let mut pool = candidates;
    let mut rounds: Vec<Round> = Vec::with_capacity(2 * rounds_per_half);

    for round_number in 1..=rounds_per_half {
        let mut fixtures = Vec::with_capacity(games_per_round);
        let mut busy: HashSet<String> = HashSet::with_capacity(n);

        for slot in 1..=games_per_round {
            let eligible: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(_, pairing)| {
                    !busy.contains(pairing.first().name()) && !busy.contains(pairing.second().name())
                })
                .map(|(idx, _)| idx)
                .collect();

            let pick = match eligible.choose(rng) {
                Some(&idx) => idx,
                None => {
                    return Err(ScheduleGenerationError::DeadEnd {
                        round: round_number,
                        slot,
                    }
                    .into())
                }
            };

            let pairing = pool.swap_remove(pick);
            busy.insert(pairing.first().name().to_string());
            busy.insert(pairing.second().name().to_string());
            fixtures.push(pairing.into_fixture(rng.gen::<bool>()));
        }

        log::debug!("Round {} assembled: {} game(s)", round_number, fixtures.len());
        rounds.push(Round::new(fixtures));
    }

    let consumed = pool_size - pool.len();
    if consumed != universe_size || !pool.is_empty() {
        return Err(ScheduleGenerationError::FixtureCountMismatch {
            expected: universe_size,
            consumed,
        }
        .into());
    }

    // Return legs: same pairings, designations reversed, slot order redrawn.
    let mirrored: Vec<Round> = rounds
        .iter()
        .map(|round| {
            let mut fixtures: Vec<Fixture> =
                round.fixtures().iter().map(Fixture::mirrored).collect();
            fixtures.shuffle(rng);
            Round::new(fixtures)
        })
        .collect();
    rounds.extend(mirrored);

    log::info!(
        "Schedule generated: {} rounds and {} game(s) per round",
        rounds.len(),
        games_per_round
    );

    Ok(Schedule::new(rounds))
}
