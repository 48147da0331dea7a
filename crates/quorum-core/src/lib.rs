//! # Quorum Core
//!
//! Side-by-side evaluation of round advancement policies.
//!
//! ## Overview
//!
//! A proposing round in a group-decision chat can end early once enough
//! participants have acted. Three candidate rules disagree about what
//! "enough" means once explicit skips enter the picture. This workspace
//! evaluates all three against identical inputs and audits every verdict
//! for pathological outcomes, so the rules can be compared on evidence
//! rather than intuition.
//!
//! ## Architecture
//!
//! ```text
//!                    ┌──────────────────┐
//!                    │  Scenario Driver │  ← this crate
//!                    └────────┬─────────┘
//!                             │
//!            ┌────────────────┼────────────────┐
//!            ▼                ▼                ▼
//!     ┌────────────┐   ┌────────────┐   ┌────────────┐
//!     │  current   │   │ particip.  │   │  reduced   │
//!     │   rule     │   │   credit   │   │    pool    │
//!     └──────┬─────┘   └──────┬─────┘   └──────┬─────┘
//!            │                │                │
//!            └────────────────┼────────────────┘
//!                             ▼
//!                    ┌──────────────────┐
//!                    │ Problem Audit    │
//!                    └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use quorum_core::{run_scenario, RoundConfig, RoundState};
//!
//! let outcome = run_scenario(&RoundConfig::new(80, 5, 3), &RoundState::new(10, 6, 2));
//!
//! for (policy, verdict) in &outcome.verdicts {
//!     println!("{}: advance={}", policy, verdict.should_advance);
//! }
//! ```
//!
//! Every evaluation is a one-shot pure computation. Nothing is persisted,
//! nothing runs concurrently, and a given input always produces the same
//! outcome.

mod error;
mod scenario;

pub use error::QuorumError;
pub use scenario::{run_scenario, run_scenario_checked, ScenarioOutcome};

// Re-export component types for convenience
pub use quorum_audit::{
    classify, Problem, Severity, MIN_PROPOSITIONS_FOR_RATING, WEAK_SIGNAL_RATIO,
};
pub use quorum_policy::{
    all_policies, AdvancePolicy, AdvanceVerdict, CurrentRule, ParticipationCredit, PolicyId,
    ReducedPool, RoundConfig, RoundState, StateError, UnmetCheck,
};

/// Core result type for quorum operations.
pub type Result<T> = std::result::Result<T, QuorumError>;
