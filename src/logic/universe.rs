//! Fixture universe: every candidate pairing for one round-robin cycle.

use crate::models::{InvalidInputError, Pairing, Participant};
use std::collections::HashSet;

/// Check the hard preconditions on a participant list: non-empty, even
/// count, unique names.
pub(crate) fn validate_participants(
    participants: &[Participant],
) -> Result<(), InvalidInputError> {
    if participants.is_empty() {
        return Err(InvalidInputError::NoParticipants);
    }
    if participants.len() % 2 != 0 {
        return Err(InvalidInputError::OddParticipantCount(participants.len()));
    }
    let mut seen = HashSet::with_capacity(participants.len());
    for p in participants {
        if !seen.insert(p.name()) {
            return Err(InvalidInputError::DuplicateName(p.name().to_string()));
        }
    }
    Ok(())
}

/// Enumerate every unordered pairing of distinct participants exactly once:
/// the N(N−1)/2 candidates a full single round-robin cycle draws from.
///
/// Pure function of its input; a precondition violation aborts generation.
pub fn enumerate_pairings(
    participants: &[Participant],
) -> Result<Vec<Pairing>, InvalidInputError> {
    validate_participants(participants)?;

    let n = participants.len();
    let mut pairings = Vec::with_capacity(n * (n - 1) / 2);
    for (i, a) in participants.iter().enumerate() {
        for b in &participants[i + 1..] {
            pairings.push(Pairing::new(a.clone(), b.clone()));
        }
    }
    Ok(pairings)
}
