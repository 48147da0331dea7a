//! The scenario driver.
//!
//! Fans a single `(config, state)` pair out to every advancement policy,
//! audits each verdict, and bundles the results for comparison.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use quorum_audit::{classify, Problem};
use quorum_policy::{all_policies, AdvanceVerdict, PolicyId, RoundConfig, RoundState};

use crate::Result;

/// Every policy's verdict and audit findings for one round snapshot.
///
/// `verdicts` always holds all policies; `problems` holds only the policies
/// whose audit found something, so an empty map means a clean scenario.
/// Both maps iterate in canonical policy order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// The thresholds the scenario ran under.
    pub config: RoundConfig,

    /// The round snapshot the scenario ran against.
    pub state: RoundState,

    /// Verdict per policy.
    pub verdicts: BTreeMap<PolicyId, AdvanceVerdict>,

    /// Audit findings per policy, non-empty lists only.
    pub problems: BTreeMap<PolicyId, Vec<Problem>>,
}

impl ScenarioOutcome {
    /// The final advance decision per policy.
    pub fn decisions(&self) -> BTreeMap<PolicyId, bool> {
        self.verdicts
            .iter()
            .map(|(id, verdict)| (*id, verdict.should_advance))
            .collect()
    }

    /// Whether the policies split on the advance decision.
    pub fn disagree(&self) -> bool {
        let mut decisions = self.verdicts.values().map(|v| v.should_advance);
        match decisions.next() {
            Some(first) => decisions.any(|d| d != first),
            None => false,
        }
    }

    /// Policies whose audit found a blocking problem.
    pub fn blocking_policies(&self) -> Vec<PolicyId> {
        self.problems
            .iter()
            .filter(|(_, problems)| problems.iter().any(Problem::is_blocking))
            .map(|(id, _)| *id)
            .collect()
    }
}

/// Runs every policy and the audit against one round snapshot.
///
/// Pure and infallible: inconsistent states are evaluated as-is, with
/// negative intermediate pools clamped to zero. Use
/// [`run_scenario_checked`] when the counts come from an untrusted source.
pub fn run_scenario(config: &RoundConfig, state: &RoundState) -> ScenarioOutcome {
    let mut verdicts = BTreeMap::new();
    let mut problems = BTreeMap::new();

    for policy in all_policies() {
        let verdict = policy.evaluate(config, state);
        let findings = classify(state, &verdict);

        debug!(
            policy = %policy.id(),
            advance = verdict.should_advance,
            problems = findings.len(),
            "policy evaluated"
        );

        if !findings.is_empty() {
            problems.insert(policy.id(), findings);
        }
        verdicts.insert(policy.id(), verdict);
    }

    ScenarioOutcome {
        config: *config,
        state: *state,
        verdicts,
        problems,
    }
}

/// Like [`run_scenario`], but rejects inconsistent participation counts.
pub fn run_scenario_checked(config: &RoundConfig, state: &RoundState) -> Result<ScenarioOutcome> {
    state.check_consistent()?;
    Ok(run_scenario(config, state))
}
