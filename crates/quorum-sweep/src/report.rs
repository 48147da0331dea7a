//! Sweep reducers and their report types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use quorum_audit::Problem;
use quorum_core::run_scenario;
use quorum_policy::PolicyId;

use crate::grid::{GridPoint, GridSpec};

/// Offending grid points retained per policy in a problem sweep.
pub const EXAMPLES_PER_POLICY: usize = 3;

/// Split grid points retained in a disagreement sweep.
pub const DISAGREEMENT_EXAMPLES: usize = 10;

/// Blocking-problem tally for one policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyFindings {
    /// Grid points where the policy's audit found a blocking problem.
    pub blocking: u64,

    /// The first few offending points, for inspection.
    pub examples: Vec<GridPoint>,
}

/// Aggregate result of a problem sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSweepSummary {
    /// Grid points evaluated.
    pub scenarios_tested: u64,

    /// Tally per policy, every policy present.
    pub findings: BTreeMap<PolicyId, PolicyFindings>,
}

/// Runs the scenario driver over a grid and tallies blocking problems.
///
/// A grid point counts against a policy when the audit of that policy's
/// verdict contains at least one blocking (critical or stuck) problem;
/// warnings alone do not count. Up to [`EXAMPLES_PER_POLICY`] offending
/// points are retained per policy, in grid order.
pub fn sweep_problems(grid: &GridSpec) -> ProblemSweepSummary {
    let mut findings: BTreeMap<PolicyId, PolicyFindings> = PolicyId::ALL
        .iter()
        .map(|id| (*id, PolicyFindings::default()))
        .collect();
    let mut scenarios_tested = 0u64;

    for point in grid.points() {
        scenarios_tested += 1;
        let outcome = run_scenario(&point.config, &point.state);

        for (id, problems) in &outcome.problems {
            if !problems.iter().any(Problem::is_blocking) {
                continue;
            }
            let entry = findings.entry(*id).or_default();
            entry.blocking += 1;
            if entry.examples.len() < EXAMPLES_PER_POLICY {
                entry.examples.push(point);
            }
        }
    }

    for (id, tally) in &findings {
        info!(policy = %id, blocking = tally.blocking, "problem sweep finished");
    }

    ProblemSweepSummary {
        scenarios_tested,
        findings,
    }
}

/// A grid point where the policies split on the advance decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disagreement {
    /// The point the policies split on.
    pub point: GridPoint,

    /// Advance decision per policy.
    pub decisions: BTreeMap<PolicyId, bool>,
}

/// Aggregate result of a disagreement sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisagreementReport {
    /// Grid points evaluated.
    pub scenarios_tested: u64,

    /// Grid points where the decisions were not unanimous.
    pub total: u64,

    /// The first few splits, for inspection.
    pub examples: Vec<Disagreement>,
}

/// Runs the scenario driver over a grid and records decision splits.
///
/// Every point where the three `should_advance` decisions are not
/// identical counts toward `total`; up to [`DISAGREEMENT_EXAMPLES`] of
/// them are retained with their per-policy decisions, in grid order.
pub fn sweep_disagreements(grid: &GridSpec) -> DisagreementReport {
    let mut scenarios_tested = 0u64;
    let mut total = 0u64;
    let mut examples = Vec::new();

    for point in grid.points() {
        scenarios_tested += 1;
        let outcome = run_scenario(&point.config, &point.state);
        if !outcome.disagree() {
            continue;
        }

        total += 1;
        if examples.len() < DISAGREEMENT_EXAMPLES {
            examples.push(Disagreement {
                point,
                decisions: outcome.decisions(),
            });
        }
    }

    info!(total, scenarios_tested, "disagreement sweep finished");

    DisagreementReport {
        scenarios_tested,
        total,
        examples,
    }
}
