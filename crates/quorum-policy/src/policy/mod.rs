//! Policy framework for round advancement decisions.
//!
//! Defines the [`AdvancePolicy`] trait and the identifiers used to key
//! per-policy results when several policies are compared side by side.

mod rules;

pub use rules::{CurrentRule, ParticipationCredit, ReducedPool};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AdvanceVerdict, RoundConfig, RoundState};

/// Identifies one of the advancement policies.
///
/// The variant order is the canonical evaluation and reporting order, and
/// the `Ord` derive follows it, so keying an ordered map by `PolicyId`
/// yields deterministic iteration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PolicyId {
    /// The rule running in production today; skip-blind.
    Current,
    /// Skips credit the percent gate, the count gate is capped.
    ParticipationCredit,
    /// Skips shrink the denominator of both gates.
    ReducedPool,
}

impl PolicyId {
    /// All policies, in canonical order.
    pub const ALL: [PolicyId; 3] = [
        PolicyId::Current,
        PolicyId::ParticipationCredit,
        PolicyId::ReducedPool,
    ];

    /// Short stable name, suitable for report keys.
    pub fn name(self) -> &'static str {
        match self {
            PolicyId::Current => "current",
            PolicyId::ParticipationCredit => "participation-credit",
            PolicyId::ReducedPool => "reduced-pool",
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for round advancement policies.
///
/// A policy is a pure function from `(config, state)` to a verdict. It must
/// be deterministic and side-effect free; given the same inputs it always
/// produces the same [`AdvanceVerdict`].
///
/// # Implementors
///
/// - [`CurrentRule`]: the production baseline, blind to skips
/// - [`ParticipationCredit`]: skips satisfy the percent gate only
/// - [`ReducedPool`]: skips remove people from both denominators
pub trait AdvancePolicy: Send + Sync {
    /// Identifier of this policy.
    fn id(&self) -> PolicyId;

    /// One-line description of how the policy treats skips.
    fn summary(&self) -> &'static str;

    /// Evaluates a round snapshot against the configured thresholds.
    fn evaluate(&self, config: &RoundConfig, state: &RoundState) -> AdvanceVerdict;
}

/// The three policies as trait objects, in canonical order.
pub fn all_policies() -> Vec<Box<dyn AdvancePolicy>> {
    vec![
        Box::new(CurrentRule),
        Box::new(ParticipationCredit),
        Box::new(ReducedPool),
    ]
}

/// Integer ceiling of `total * percent / 100`.
///
/// Widens to `u64` so oversized percent values cannot overflow.
pub(crate) fn percent_required(total: u32, percent: u32) -> u32 {
    (u64::from(total) * u64::from(percent)).div_ceil(100) as u32
}

/// Percentage `numerator / denominator * 100`, or `0.0` on an empty pool.
pub(crate) fn ratio_percent(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator) * 100.0
    }
}
