//! Input checks for proposal creation.

use crate::errors::VotingError;

/// Compute the absolute expiration of a window opened at `now`.
///
/// # Returns
/// `Err(VotingError::InvalidDuration)` when `duration` is zero or
/// `now + duration` cannot be represented.
pub fn expiration_for(now: u64, duration: u64) -> Result<u64, VotingError> {
    if duration == 0 {
        return Err(VotingError::InvalidDuration);
    }
    now.checked_add(duration)
        .ok_or(VotingError::InvalidDuration)
}
