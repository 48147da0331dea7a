//! # Quorum Sweep
//!
//! Exhaustive enumeration of the advancement parameter space.
//!
//! ## Overview
//!
//! The policy differences that matter are the ones nobody thought to write
//! a scenario for. This crate generates every combination of group size,
//! thresholds and submitted/skipped split inside bounded ranges, runs the
//! scenario driver on each point, and reduces the results two ways:
//!
//! - [`sweep_problems`]: how often does each policy produce a blocking
//!   (critical or stuck) outcome, with a few offending points kept for
//!   inspection.
//! - [`sweep_disagreements`]: where do the three policies split on the
//!   advance decision.
//!
//! Grids are generated lazily. A [`GridSpec`] is a description, not a
//! materialized list; [`GridSpec::points`] can be re-invoked to restart
//! the same enumeration, and the full grid never sits in memory.

mod grid;
mod report;

pub use grid::{CountSweep, GridPoint, GridSpec};
pub use report::{
    sweep_disagreements, sweep_problems, Disagreement, DisagreementReport, PolicyFindings,
    ProblemSweepSummary, DISAGREEMENT_EXAMPLES, EXAMPLES_PER_POLICY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_structure() {
        let spec = GridSpec::disagreement_probe();
        let _ = sweep_disagreements(&spec);
    }
}
