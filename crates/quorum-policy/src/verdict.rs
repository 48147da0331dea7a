//! Verdict types for advancement checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sub-check a policy found unsatisfied.
///
/// Each variant carries the value the policy measured and the requirement it
/// was held against. Which metric `have` refers to depends on the policy:
/// the percent gate of [`ParticipationCredit`](crate::ParticipationCredit)
/// measures participation, every other gate measures submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmetCheck {
    /// The percent gate fell short.
    Percent {
        /// Measured value (submissions or participation, per policy).
        have: u32,
        /// Required count derived from the percent threshold.
        need: u32,
    },

    /// The absolute count gate fell short.
    Count {
        /// Submissions recorded.
        have: u32,
        /// Effective count requirement after any dynamic adjustment.
        need: u32,
    },

    /// The proposing minimum fell short.
    Minimum {
        /// Submissions recorded.
        have: u32,
        /// Configured floor.
        need: u32,
    },

    /// Every participant skipped; nobody is left to submit.
    EveryoneSkipped,
}

impl fmt::Display for UnmetCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent { have, need } => write!(f, "percent {}/{}", have, need),
            Self::Count { have, need } => write!(f, "count {}/{}", have, need),
            Self::Minimum { have, need } => write!(f, "minimum {}/{}", have, need),
            Self::EveryoneSkipped => write!(f, "everyone skipped, no propositions"),
        }
    }
}

/// The structured outcome of one policy evaluation.
///
/// `should_advance` is the final decision; the `*_met` booleans expose the
/// individual gates so callers can see which one held the round back.
/// `effective_count_threshold` is the absolute count requirement the policy
/// actually applied, after any dynamic adjustment for skips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvanceVerdict {
    /// Final decision: close the round and advance.
    pub should_advance: bool,

    /// Whether the percent gate was satisfied.
    pub percent_met: bool,

    /// Whether the absolute count gate was satisfied.
    pub count_met: bool,

    /// Whether the proposing minimum was satisfied.
    pub minimum_met: bool,

    /// The count requirement actually enforced.
    pub effective_count_threshold: u32,

    /// Participation percentage under this policy's own denominator.
    pub percent_value: f64,

    /// Gates that failed, in check order. Empty when all gates held.
    pub unmet: Vec<UnmetCheck>,
}

impl AdvanceVerdict {
    /// Human-readable summary of the failed gates, or `"all met"`.
    pub fn reason(&self) -> String {
        if self.unmet.is_empty() {
            "all met".to_string()
        } else {
            self.unmet
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(unmet: Vec<UnmetCheck>) -> AdvanceVerdict {
        AdvanceVerdict {
            should_advance: unmet.is_empty(),
            percent_met: true,
            count_met: true,
            minimum_met: true,
            effective_count_threshold: 5,
            percent_value: 60.0,
            unmet,
        }
    }

    #[test]
    fn test_reason_all_met() {
        assert_eq!(verdict(vec![]).reason(), "all met");
    }

    #[test]
    fn test_reason_joins_unmet_checks() {
        let v = verdict(vec![
            UnmetCheck::Percent { have: 6, need: 8 },
            UnmetCheck::Minimum { have: 6, need: 7 },
        ]);
        assert_eq!(v.reason(), "percent 6/8, minimum 6/7");
    }

    #[test]
    fn test_everyone_skipped_display() {
        assert_eq!(
            UnmetCheck::EveryoneSkipped.to_string(),
            "everyone skipped, no propositions"
        );
    }

    #[test]
    fn test_verdict_serialization() {
        let v = verdict(vec![UnmetCheck::Count { have: 2, need: 5 }]);
        let json = serde_json::to_string(&v).unwrap();
        let parsed: AdvanceVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, v);
    }
}
