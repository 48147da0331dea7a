//! Participation state of a single proposing round.

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// One immutable snapshot of a proposing round.
///
/// Counts how many of the `total_participants` have submitted a proposition
/// and how many have explicitly skipped; everyone else is inactive. Derived
/// quantities are computed on demand, never stored.
///
/// A well-formed snapshot satisfies `submitted + skipped <=
/// total_participants`. The policies do not require this, they clamp
/// negative intermediate pools to zero, but verdicts over an inconsistent
/// snapshot are not meaningful. Callers holding untrusted counts should run
/// [`check_consistent`](Self::check_consistent) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Total active participants in the round (the denominator).
    pub total_participants: u32,

    /// Participants who completed a submission.
    pub submitted: u32,

    /// Participants who explicitly declined to submit this round.
    pub skipped: u32,
}

impl RoundState {
    /// Creates a snapshot from raw counts.
    pub fn new(total_participants: u32, submitted: u32, skipped: u32) -> Self {
        Self {
            total_participants,
            submitted,
            skipped,
        }
    }

    /// Participants who neither submitted nor skipped.
    pub fn inactive(&self) -> u32 {
        self.total_participants
            .saturating_sub(self.submitted)
            .saturating_sub(self.skipped)
    }

    /// Participants who made a decision, either way.
    pub fn participated(&self) -> u32 {
        self.submitted + self.skipped
    }

    /// Participants who still could submit: everyone minus the skips.
    pub fn potential_submitters(&self) -> u32 {
        self.total_participants.saturating_sub(self.skipped)
    }

    /// Whether the counts are mutually consistent.
    pub fn is_consistent(&self) -> bool {
        self.participated() <= self.total_participants
    }

    /// Rejects snapshots where decisions outnumber participants.
    pub fn check_consistent(&self) -> Result<(), StateError> {
        if self.is_consistent() {
            Ok(())
        } else {
            Err(StateError::InconsistentCounts {
                total_participants: self.total_participants,
                submitted: self.submitted,
                skipped: self.skipped,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_counts() {
        let state = RoundState::new(10, 6, 2);
        assert_eq!(state.inactive(), 2);
        assert_eq!(state.participated(), 8);
        assert_eq!(state.potential_submitters(), 8);
    }

    #[test]
    fn test_empty_round() {
        let state = RoundState::new(0, 0, 0);
        assert_eq!(state.inactive(), 0);
        assert_eq!(state.participated(), 0);
        assert_eq!(state.potential_submitters(), 0);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_inconsistent_counts_clamp() {
        // 7 + 7 > 10: derived pools clamp to zero instead of wrapping
        let state = RoundState::new(10, 7, 7);
        assert_eq!(state.inactive(), 0);
        assert_eq!(state.potential_submitters(), 3);
        assert!(!state.is_consistent());
    }

    #[test]
    fn test_check_consistent() {
        assert!(RoundState::new(10, 6, 2).check_consistent().is_ok());

        let err = RoundState::new(5, 4, 3).check_consistent().unwrap_err();
        assert!(err.to_string().contains("4 submitted"));
        assert!(err.to_string().contains("3 skipped"));
    }

    #[test]
    fn test_state_serialization() {
        let state = RoundState::new(10, 6, 2);
        let json = serde_json::to_string(&state).unwrap();
        let parsed: RoundState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }
}
