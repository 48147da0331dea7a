//! The verdict classifier.

use quorum_policy::{AdvanceVerdict, RoundState};

use crate::problem::{Problem, MIN_PROPOSITIONS_FOR_RATING, WEAK_SIGNAL_RATIO};

/// Flags every known failure pattern a verdict matches.
///
/// Pure function; the checks run in a fixed order and each fires
/// independently, so one verdict can collect several problems. The order
/// only fixes the report layout, it carries no ranking.
pub fn classify(state: &RoundState, verdict: &AdvanceVerdict) -> Vec<Problem> {
    let mut problems = Vec::new();

    // Advancing without enough data points for the rating phase
    if verdict.should_advance && state.submitted < MIN_PROPOSITIONS_FOR_RATING {
        problems.push(Problem::ThinAdvance {
            submitted: state.submitted,
        });
    }

    // Requirement no state with this group size can ever satisfy
    if verdict.effective_count_threshold > state.total_participants {
        problems.push(Problem::Unsatisfiable {
            required: verdict.effective_count_threshold,
            total_participants: state.total_participants,
        });
    }

    // Requirement unreachable given the skips already recorded
    let max_possible = state.potential_submitters();
    if verdict.effective_count_threshold > max_possible && state.skipped > 0 {
        problems.push(Problem::SkipLocked {
            required: verdict.effective_count_threshold,
            max_possible,
            skipped: state.skipped,
        });
    }

    // Everyone who could submit has submitted, and still no advance
    if state.submitted == max_possible && !verdict.should_advance && state.submitted > 0 {
        problems.push(Problem::Stalled {
            submitted: state.submitted,
            unmet: verdict.unmet.clone(),
        });
    }

    // Advancing on a small minority of the group
    if verdict.should_advance
        && f64::from(state.submitted) < f64::from(state.total_participants) * WEAK_SIGNAL_RATIO
    {
        problems.push(Problem::WeakSignal {
            submitted: state.submitted,
            total_participants: state.total_participants,
            percent_value: verdict.percent_value,
        });
    }

    problems
}
