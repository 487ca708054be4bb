//! Participant roster input: one name per line.

use crate::error::{AmidaError, Result};

/// Smallest roster that can carry a rung.
pub const MIN_PARTICIPANTS: usize = 2;

/// Split a multi-line input into names, trimming each and dropping blanks.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reject rosters too small to play.
pub fn validate_roster<S: AsRef<str>>(names: &[S]) -> Result<()> {
    if names.len() < MIN_PARTICIPANTS {
        return Err(AmidaError::InvalidParticipantCount {
            got: names.len(),
            min: MIN_PARTICIPANTS,
        });
    }
    Ok(())
}
