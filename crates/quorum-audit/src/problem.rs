//! Problem vocabulary for verdict audits.

use serde::{Deserialize, Serialize};
use std::fmt;

use quorum_policy::UnmetCheck;

/// Fewest propositions the rating phase can meaningfully work with.
pub const MIN_PROPOSITIONS_FOR_RATING: u32 = 3;

/// Fraction of the group below which an advance counts as weak signal.
pub const WEAK_SIGNAL_RATIO: f64 = 0.3;

/// Severity of a detected problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The verdict advanced a round that should not have advanced.
    Critical,
    /// The requirement can never be satisfied by this group.
    Impossible,
    /// The requirement became unreachable once skips were recorded.
    Stuck,
    /// Suspicious outcome worth surfacing, not necessarily wrong.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Impossible => write!(f, "IMPOSSIBLE"),
            Severity::Stuck => write!(f, "STUCK"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A defect in a verdict relative to the state that produced it.
///
/// Multiple problems can fire for one verdict; they are reported in the
/// fixed order the classifier checks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Problem {
    /// Advanced with too few propositions for the rating phase.
    ThinAdvance {
        /// Submissions at the moment of advance.
        submitted: u32,
    },

    /// The enforced count requirement exceeds the whole group.
    Unsatisfiable {
        /// The enforced requirement.
        required: u32,
        /// Participants in the round.
        total_participants: u32,
    },

    /// The enforced count requirement exceeds the pool left after skips.
    SkipLocked {
        /// The enforced requirement.
        required: u32,
        /// Submissions still possible.
        max_possible: u32,
        /// Skips already recorded.
        skipped: u32,
    },

    /// Everyone who could submit has, and the round still waits.
    Stalled {
        /// Submissions recorded.
        submitted: u32,
        /// The gates that held the round back.
        unmet: Vec<UnmetCheck>,
    },

    /// Advanced on a small minority of the group.
    WeakSignal {
        /// Submissions at the moment of advance.
        submitted: u32,
        /// Participants in the round.
        total_participants: u32,
        /// The advancing policy's own percent figure.
        percent_value: f64,
    },
}

impl Problem {
    /// Severity of this problem.
    pub fn severity(&self) -> Severity {
        match self {
            Problem::ThinAdvance { .. } => Severity::Critical,
            Problem::Unsatisfiable { .. } => Severity::Impossible,
            Problem::SkipLocked { .. } => Severity::Stuck,
            Problem::Stalled { .. } | Problem::WeakSignal { .. } => Severity::Warning,
        }
    }

    /// Whether this problem should block a policy from shipping.
    ///
    /// Blocking problems are the `Critical` and `Stuck` severities; the
    /// others are surfaced but tolerated.
    pub fn is_blocking(&self) -> bool {
        matches!(self.severity(), Severity::Critical | Severity::Stuck)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::ThinAdvance { submitted } => write!(
                f,
                "{}: advances with only {} propositions (need {} for rating)",
                self.severity(),
                submitted,
                MIN_PROPOSITIONS_FOR_RATING
            ),
            Problem::Unsatisfiable {
                required,
                total_participants,
            } => write!(
                f,
                "{}: need {} but only {} participants",
                self.severity(),
                required,
                total_participants
            ),
            Problem::SkipLocked {
                required,
                max_possible,
                skipped,
            } => write!(
                f,
                "{}: need {} submissions but max possible is {} (after {} skips)",
                self.severity(),
                required,
                max_possible,
                skipped
            ),
            Problem::Stalled { submitted, unmet } => {
                let reasons = unmet
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "{}: all potential submitters ({}) submitted but not advancing: {}",
                    self.severity(),
                    submitted,
                    reasons
                )
            }
            Problem::WeakSignal {
                submitted,
                total_participants,
                percent_value,
            } => write!(
                f,
                "{}: advancing with only {}/{} ({:.0}%) submissions",
                self.severity(),
                submitted,
                total_participants,
                percent_value
            ),
        }
    }
}
