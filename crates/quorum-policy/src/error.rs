//! Error types for the policy crate.

use thiserror::Error;

/// Errors raised when validating round state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// More decisions were recorded than there are participants.
    #[error(
        "inconsistent round state: {submitted} submitted + {skipped} skipped \
         exceeds {total_participants} participants"
    )]
    InconsistentCounts {
        /// Total participants in the round.
        total_participants: u32,
        /// Recorded submissions.
        submitted: u32,
        /// Recorded skips.
        skipped: u32,
    },
}
