//! # Policy Scenario Tests
//!
//! Hand-picked round snapshots with worked-out expectations for all three
//! policies. Each scenario pins the exact arithmetic, not just the final
//! decision, so a regression in any gate shows up here first.

use quorum_core::{run_scenario, PolicyId, Problem, RoundConfig, RoundState, Severity};

fn decisions(
    config: RoundConfig,
    state: RoundState,
) -> (bool, bool, bool) {
    let outcome = run_scenario(&config, &state);
    let d = outcome.decisions();
    (
        d[&PolicyId::Current],
        d[&PolicyId::ParticipationCredit],
        d[&PolicyId::ReducedPool],
    )
}

// ============================================================================
// NORMAL ROUNDS
// ============================================================================

#[test]
fn test_scenario_some_skip_some_submit() {
    // 10 participants, 6 submitted, 2 skipped under (80%, 5, 3)
    let config = RoundConfig::new(80, 5, 3);
    let state = RoundState::new(10, 6, 2);
    let outcome = run_scenario(&config, &state);

    // Current: 80% of 10 needs 8 submissions, 6 is short
    let current = &outcome.verdicts[&PolicyId::Current];
    assert!(!current.should_advance);
    assert_eq!(current.effective_count_threshold, 8);

    // Participation credit: 8 participated meets the percent gate,
    // 6 submissions clear the capped count of 5
    let credit = &outcome.verdicts[&PolicyId::ParticipationCredit];
    assert!(credit.should_advance);
    assert_eq!(credit.effective_count_threshold, 5);

    // Reduced pool: 80% of the 8 potential submitters needs 7
    let reduced = &outcome.verdicts[&PolicyId::ReducedPool];
    assert!(!reduced.should_advance);
    assert!(!reduced.percent_met);

    assert!(outcome.disagree());
}

#[test]
fn test_scenario_everyone_who_could_submit_did() {
    // 5 submitted, 5 skipped: the skip-aware rules advance, current stalls
    let (current, credit, reduced) =
        decisions(RoundConfig::new(80, 5, 3), RoundState::new(10, 5, 5));
    assert!(!current);
    assert!(credit);
    assert!(reduced);
}

#[test]
fn test_scenario_high_count_threshold_with_many_skips() {
    // Count threshold 8 with 4 skips: nobody advances, current is stuck
    let config = RoundConfig::new(80, 8, 3);
    let state = RoundState::new(10, 5, 4);
    let outcome = run_scenario(&config, &state);

    assert!(outcome.decisions().values().all(|&advance| !advance));
    assert!(outcome.problems[&PolicyId::Current]
        .iter()
        .any(|p| p.severity() == Severity::Stuck));
}

#[test]
fn test_scenario_everyone_skips() {
    let config = RoundConfig::new(80, 5, 3);
    let state = RoundState::new(10, 0, 10);
    let outcome = run_scenario(&config, &state);

    assert!(outcome.decisions().values().all(|&advance| !advance));

    // Reduced pool takes its vacuous branch
    let reduced = &outcome.verdicts[&PolicyId::ReducedPool];
    assert!(reduced.percent_met);
    assert_eq!(reduced.effective_count_threshold, 0);
    assert!((reduced.percent_value - 100.0).abs() < f64::EPSILON);
    assert_eq!(reduced.reason(), "everyone skipped, no propositions");
}

// ============================================================================
// SMALL GROUPS
// ============================================================================

#[test]
fn test_scenario_minimum_group_full_participation() {
    // 3 of 3 submitted under (80%, 3, 3): unanimous advance
    let outcome = run_scenario(&RoundConfig::new(80, 3, 3), &RoundState::new(3, 3, 0));
    assert!(outcome.decisions().values().all(|&advance| advance));
    assert!(!outcome.disagree());
    assert!(outcome.problems.is_empty());
}

#[test]
fn test_scenario_minimum_group_one_skip() {
    // One skip in a group of 3 drops below the proposing minimum everywhere
    let config = RoundConfig::new(80, 3, 3);
    let state = RoundState::new(3, 2, 1);
    let outcome = run_scenario(&config, &state);

    assert!(outcome.decisions().values().all(|&advance| !advance));

    // The skip-aware gates are satisfied; only the minimum holds
    let credit = &outcome.verdicts[&PolicyId::ParticipationCredit];
    assert!(credit.percent_met);
    assert!(credit.count_met);
    assert!(!credit.minimum_met);

    // Both potential submitters submitted, so every policy reports a stall
    for id in PolicyId::ALL {
        assert!(outcome.problems[&id]
            .iter()
            .any(|p| matches!(p, Problem::Stalled { submitted: 2, .. })));
    }
}

// ============================================================================
// LOW THRESHOLDS AND HIGH THRESHOLDS
// ============================================================================

#[test]
fn test_scenario_low_threshold_many_skips() {
    // (50%, 3, 3) with 3 submitted, 6 skipped
    let (current, credit, reduced) =
        decisions(RoundConfig::new(50, 3, 3), RoundState::new(10, 3, 6));
    assert!(!current); // still wants 5 of 10
    assert!(credit); // 9 participated, 3 submissions clear the gates
    assert!(reduced); // 3 of 4 potential beats 50%
}

#[test]
fn test_scenario_full_percent_threshold_one_skip() {
    // 100% threshold: one skip makes the current rule unreachable
    let config = RoundConfig::new(100, 3, 3);
    let state = RoundState::new(5, 4, 1);
    let outcome = run_scenario(&config, &state);

    let d = outcome.decisions();
    assert!(!d[&PolicyId::Current]);
    assert!(d[&PolicyId::ParticipationCredit]);
    assert!(d[&PolicyId::ReducedPool]);

    let current_problems = &outcome.problems[&PolicyId::Current];
    assert!(current_problems
        .iter()
        .any(|p| p.severity() == Severity::Stuck));
    assert!(current_problems
        .iter()
        .any(|p| matches!(p, Problem::Stalled { submitted: 4, .. })));
}
