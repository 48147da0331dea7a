//! The three advancement rules under comparison.
//!
//! All three apply the same trio of gates (percent, absolute count,
//! proposing minimum) and differ only in how an explicit skip affects the
//! arithmetic. The differences are small to state and large in effect; a
//! skip-heavy round can be unwinnable under one rule and immediately
//! advanceable under another.

use super::{percent_required, ratio_percent, AdvancePolicy, PolicyId};
use crate::{AdvanceVerdict, RoundConfig, RoundState, UnmetCheck};

/// The production baseline. Skips are invisible.
///
/// # Rule
///
/// - `percent_required = ceil(total * threshold_percent / 100)`
/// - `effective_required = max(percent_required, threshold_count)`
/// - Advances when `submitted >= effective_required` and `submitted >=
///   proposing_minimum`.
///
/// Only submissions count anywhere. A participant who skips is
/// indistinguishable from one who went silent, so every skip silently
/// shrinks the pool that must clear a requirement sized for the full group.
/// That is the defect the other two rules attempt to fix.
pub struct CurrentRule;

impl AdvancePolicy for CurrentRule {
    fn id(&self) -> PolicyId {
        PolicyId::Current
    }

    fn summary(&self) -> &'static str {
        "skips are invisible, requirements sized for the full group"
    }

    fn evaluate(&self, config: &RoundConfig, state: &RoundState) -> AdvanceVerdict {
        let percent_req = percent_required(state.total_participants, config.threshold_percent);

        // More restrictive requirement wins
        let effective_required = percent_req.max(config.threshold_count);

        let percent_met = state.submitted >= percent_req;
        let count_met = state.submitted >= config.threshold_count;
        let minimum_met = state.submitted >= config.proposing_minimum;
        let should_advance = state.submitted >= effective_required && minimum_met;

        let mut unmet = Vec::new();
        if !percent_met {
            unmet.push(UnmetCheck::Percent {
                have: state.submitted,
                need: percent_req,
            });
        }
        if !count_met {
            unmet.push(UnmetCheck::Count {
                have: state.submitted,
                need: config.threshold_count,
            });
        }
        if !minimum_met {
            unmet.push(UnmetCheck::Minimum {
                have: state.submitted,
                need: config.proposing_minimum,
            });
        }

        AdvanceVerdict {
            should_advance,
            percent_met,
            count_met,
            minimum_met,
            effective_count_threshold: effective_required,
            percent_value: ratio_percent(state.submitted, state.total_participants),
            unmet,
        }
    }
}

/// Skips count toward the percent gate, and cap the count gate.
///
/// # Rule
///
/// - Percent gate: `participated >= ceil(total * threshold_percent / 100)`,
///   so a skip is as good as a submission for reaching quorum.
/// - Count gate: `submitted >= min(threshold_count, total - skipped,
///   total)`. The absolute requirement can never demand more submissions
///   than remain possible once the recorded skips are fixed.
/// - Minimum gate: `submitted >= proposing_minimum`, unchanged.
///
/// The two threshold gates measure different metrics (participation versus
/// submissions), so they are combined as a conjunction rather than a single
/// max-of-requirements comparison.
pub struct ParticipationCredit;

impl AdvancePolicy for ParticipationCredit {
    fn id(&self) -> PolicyId {
        PolicyId::ParticipationCredit
    }

    fn summary(&self) -> &'static str {
        "skips satisfy the percent gate, count gate capped by remaining pool"
    }

    fn evaluate(&self, config: &RoundConfig, state: &RoundState) -> AdvanceVerdict {
        let percent_req = percent_required(state.total_participants, config.threshold_percent);

        // Can't require more submissions than are still possible
        let max_possible = state.potential_submitters();
        let effective_count = config
            .threshold_count
            .min(max_possible)
            .min(state.total_participants);

        let percent_met = state.participated() >= percent_req;
        let count_met = state.submitted >= effective_count;
        let minimum_met = state.submitted >= config.proposing_minimum;
        let should_advance = percent_met && count_met && minimum_met;

        let mut unmet = Vec::new();
        if !percent_met {
            unmet.push(UnmetCheck::Percent {
                have: state.participated(),
                need: percent_req,
            });
        }
        if !count_met {
            unmet.push(UnmetCheck::Count {
                have: state.submitted,
                need: effective_count,
            });
        }
        if !minimum_met {
            unmet.push(UnmetCheck::Minimum {
                have: state.submitted,
                need: config.proposing_minimum,
            });
        }

        AdvanceVerdict {
            should_advance,
            percent_met,
            count_met,
            minimum_met,
            effective_count_threshold: effective_count,
            percent_value: ratio_percent(state.participated(), state.total_participants),
            unmet,
        }
    }
}

/// Skips shrink the denominator of both gates.
///
/// # Rule
///
/// Measures "of those who could have submitted, how many did". With
/// `potential = total - skipped`:
///
/// - Percent gate: `submitted >= ceil(potential * threshold_percent / 100)`
/// - Count gate: `submitted >= min(threshold_count, potential)`
/// - Minimum gate: `submitted >= proposing_minimum`, unchanged.
///
/// When everyone skipped there is nobody left to ask. That round never
/// advances regardless of thresholds; the percent gate is reported as
/// vacuously satisfied with a 100% value, and the division by an empty pool
/// never happens.
pub struct ReducedPool;

impl AdvancePolicy for ReducedPool {
    fn id(&self) -> PolicyId {
        PolicyId::ReducedPool
    }

    fn summary(&self) -> &'static str {
        "skips shrink the submitter pool both gates measure against"
    }

    fn evaluate(&self, config: &RoundConfig, state: &RoundState) -> AdvanceVerdict {
        let potential = state.potential_submitters();

        if potential == 0 {
            return AdvanceVerdict {
                should_advance: false,
                percent_met: true, // vacuously true
                count_met: false,
                minimum_met: false,
                effective_count_threshold: 0,
                percent_value: 100.0,
                unmet: vec![UnmetCheck::EveryoneSkipped],
            };
        }

        let percent_req = percent_required(potential, config.threshold_percent);
        let effective_count = config.threshold_count.min(potential);

        let percent_met = state.submitted >= percent_req;
        let count_met = state.submitted >= effective_count;
        let minimum_met = state.submitted >= config.proposing_minimum;
        let should_advance = percent_met && count_met && minimum_met;

        let mut unmet = Vec::new();
        if !percent_met {
            unmet.push(UnmetCheck::Percent {
                have: state.submitted,
                need: percent_req,
            });
        }
        if !count_met {
            unmet.push(UnmetCheck::Count {
                have: state.submitted,
                need: effective_count,
            });
        }
        if !minimum_met {
            unmet.push(UnmetCheck::Minimum {
                have: state.submitted,
                need: config.proposing_minimum,
            });
        }

        AdvanceVerdict {
            should_advance,
            percent_met,
            count_met,
            minimum_met,
            effective_count_threshold: effective_count,
            percent_value: ratio_percent(state.submitted, potential),
            unmet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all_policies;

    fn config() -> RoundConfig {
        RoundConfig::new(80, 5, 3)
    }

    #[test]
    fn test_current_rule_mixed_round() {
        // 10 participants, 6 submitted, 2 skipped: 80% of 10 needs 8
        let verdict = CurrentRule.evaluate(&config(), &RoundState::new(10, 6, 2));

        assert!(!verdict.should_advance);
        assert!(!verdict.percent_met);
        assert!(verdict.count_met);
        assert!(verdict.minimum_met);
        assert_eq!(verdict.effective_count_threshold, 8);
        assert!((verdict.percent_value - 60.0).abs() < f64::EPSILON);
        assert_eq!(verdict.reason(), "percent 6/8");
    }

    #[test]
    fn test_current_rule_count_threshold_wins_max() {
        // 80% of 4 is 4, count threshold 5 is more restrictive
        let verdict = CurrentRule.evaluate(&config(), &RoundState::new(4, 4, 0));
        assert_eq!(verdict.effective_count_threshold, 5);
        assert!(!verdict.should_advance);
    }

    #[test]
    fn test_current_rule_is_skip_blind() {
        let base = CurrentRule.evaluate(&config(), &RoundState::new(10, 4, 0));
        for skipped in 0..=6 {
            let verdict = CurrentRule.evaluate(&config(), &RoundState::new(10, 4, skipped));
            assert_eq!(verdict, base, "skips must not affect the current rule");
        }
    }

    #[test]
    fn test_current_rule_empty_round_percent_value() {
        let verdict = CurrentRule.evaluate(&config(), &RoundState::new(0, 0, 0));
        assert_eq!(verdict.percent_value, 0.0);
        assert!(!verdict.should_advance);
    }

    #[test]
    fn test_participation_credit_mixed_round() {
        // participated 8 meets the percent gate, 6 submissions clear count=5
        let verdict = ParticipationCredit.evaluate(&config(), &RoundState::new(10, 6, 2));

        assert!(verdict.should_advance);
        assert!(verdict.percent_met);
        assert!(verdict.count_met);
        assert!(verdict.minimum_met);
        assert_eq!(verdict.effective_count_threshold, 5);
        assert!((verdict.percent_value - 80.0).abs() < f64::EPSILON);
        assert_eq!(verdict.reason(), "all met");
    }

    #[test]
    fn test_participation_credit_caps_count_by_pool() {
        // 4 skips leave 6 potential submitters, count threshold 8 is capped
        let heavy = RoundConfig::new(80, 8, 3);
        let verdict = ParticipationCredit.evaluate(&heavy, &RoundState::new(10, 5, 4));
        assert_eq!(verdict.effective_count_threshold, 6);
        assert!(!verdict.count_met);
        assert!(!verdict.should_advance);
    }

    #[test]
    fn test_participation_credit_cap_properties() {
        // Effective count never exceeds the remaining pool or the total
        for total in 0..=11 {
            for submitted in 0..=total {
                for skipped in 0..=(total - submitted) {
                    let state = RoundState::new(total, submitted, skipped);
                    let verdict = ParticipationCredit.evaluate(&config(), &state);
                    assert!(verdict.effective_count_threshold <= total - skipped);
                    assert!(verdict.effective_count_threshold <= total);
                }
            }
        }
    }

    #[test]
    fn test_participation_credit_minimum_still_binds() {
        // All ten decided, but zero submissions can never advance
        let verdict = ParticipationCredit.evaluate(&config(), &RoundState::new(10, 0, 10));
        assert!(verdict.percent_met);
        assert!(verdict.count_met); // capped to zero
        assert!(!verdict.minimum_met);
        assert!(!verdict.should_advance);
        assert_eq!(verdict.effective_count_threshold, 0);
    }

    #[test]
    fn test_reduced_pool_mixed_round() {
        // potential 8, 80% of 8 needs 7, only 6 submitted
        let verdict = ReducedPool.evaluate(&config(), &RoundState::new(10, 6, 2));

        assert!(!verdict.should_advance);
        assert!(!verdict.percent_met);
        assert!(verdict.count_met);
        assert_eq!(verdict.effective_count_threshold, 5);
        assert!((verdict.percent_value - 75.0).abs() < f64::EPSILON);
        assert_eq!(verdict.reason(), "percent 6/7");
    }

    #[test]
    fn test_reduced_pool_everyone_skipped() {
        for total in [1, 5, 10] {
            let verdict = ReducedPool.evaluate(&config(), &RoundState::new(total, 0, total));
            assert!(!verdict.should_advance);
            assert!(verdict.percent_met);
            assert!(!verdict.count_met);
            assert!(!verdict.minimum_met);
            assert_eq!(verdict.effective_count_threshold, 0);
            assert!((verdict.percent_value - 100.0).abs() < f64::EPSILON);
            assert_eq!(verdict.reason(), "everyone skipped, no propositions");
        }
    }

    #[test]
    fn test_reduced_pool_empty_round_takes_vacuous_branch() {
        let verdict = ReducedPool.evaluate(&config(), &RoundState::new(0, 0, 0));
        assert!(!verdict.should_advance);
        assert!((verdict.percent_value - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reduced_pool_full_participation_advances() {
        // 5 of 5 potential submitters after 5 skips
        let verdict = ReducedPool.evaluate(&config(), &RoundState::new(10, 5, 5));
        assert!(verdict.should_advance);
        assert!((verdict.percent_value - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_policies_deterministic() {
        let state = RoundState::new(10, 6, 2);
        for policy in all_policies() {
            let first = policy.evaluate(&config(), &state);
            let second = policy.evaluate(&config(), &state);
            assert_eq!(first, second, "{} must be deterministic", policy.id());
        }
    }

    #[test]
    fn test_all_policies_monotone_in_submissions() {
        // More submissions never flips an advance back to a wait
        for policy in all_policies() {
            for total in 3..=11 {
                for skipped in 0..=total {
                    let mut advanced = false;
                    for submitted in 0..=(total - skipped) {
                        let state = RoundState::new(total, submitted, skipped);
                        let verdict = policy.evaluate(&config(), &state);
                        if advanced {
                            assert!(
                                verdict.should_advance,
                                "{} regressed at total={} submitted={} skipped={}",
                                policy.id(),
                                total,
                                submitted,
                                skipped
                            );
                        }
                        advanced = verdict.should_advance;
                    }
                }
            }
        }
    }

    #[test]
    fn test_exact_threshold_small_group_advances_everywhere() {
        // 3 of 3 submitted with thresholds (80, 3, 3) satisfies every rule
        let tight = RoundConfig::new(80, 3, 3);
        let state = RoundState::new(3, 3, 0);
        for policy in all_policies() {
            let verdict = policy.evaluate(&tight, &state);
            assert!(verdict.should_advance, "{} should advance", policy.id());
            assert_eq!(verdict.reason(), "all met");
        }
    }
}
