//! # Quorum Audit
//!
//! Pathology detection for advancement verdicts.
//!
//! ## Overview
//!
//! A policy verdict can be locally correct and still describe a round that
//! is globally broken: a requirement nobody can ever satisfy, a round that
//! advanced on almost no signal, a group that did everything it could and
//! is still waiting. This crate inspects a verdict against the state that
//! produced it and reports every known failure pattern it matches.
//!
//! Problems are derived, never stored. Each call to [`classify`] recomputes
//! the list from scratch, so the audit stays a pure function of its inputs.
//!
//! ## Severities
//!
//! | Severity | Meaning |
//! |----------|---------|
//! | `Critical` | Advanced without enough propositions to rate |
//! | `Impossible` | Requirement exceeds the whole group |
//! | `Stuck` | Requirement exceeds what remains after skips |
//! | `Warning` | Suspicious but survivable |
//!
//! `Critical` and `Stuck` are the blocking severities; the exhaustive sweep
//! counts exactly those.

mod classify;
mod problem;

pub use classify::classify;
pub use problem::{Problem, Severity, MIN_PROPOSITIONS_FOR_RATING, WEAK_SIGNAL_RATIO};
