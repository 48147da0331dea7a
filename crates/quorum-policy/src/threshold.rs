//! Generic early-advance threshold check.
//!
//! The live system uses one threshold check for every phase that can end
//! before its timer: a phase advances early once enough participants have
//! acted, where "enough" is the more restrictive of a percent-based and a
//! count-based requirement. Either threshold can be left unset, and with
//! both unset early advance is disabled entirely.
//!
//! The proposing-round policies in [`crate::policy`] are refinements of
//! this check that additionally care about skips.

use serde::{Deserialize, Serialize};

use crate::policy::percent_required;

/// Optional early-advance thresholds for a phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Percent of participants required, if set.
    pub threshold_percent: Option<u32>,

    /// Absolute participation count required, if set.
    pub threshold_count: Option<u32>,
}

impl ThresholdConfig {
    /// Creates a config from optional thresholds.
    pub fn new(threshold_percent: Option<u32>, threshold_count: Option<u32>) -> Self {
        Self {
            threshold_percent,
            threshold_count,
        }
    }

    /// Whether early advance is disabled (no threshold set).
    pub fn is_disabled(&self) -> bool {
        self.threshold_percent.is_none() && self.threshold_count.is_none()
    }
}

/// The participation count required to advance early, or `None` when
/// early advance is disabled.
///
/// Takes the MAX of the percent-based requirement (rounded up) and the
/// count-based requirement; an unset threshold contributes zero.
pub fn required_count(config: &ThresholdConfig, total_participants: u32) -> Option<u32> {
    if config.is_disabled() {
        return None;
    }

    let percent_req = config
        .threshold_percent
        .map(|pct| percent_required(total_participants, pct))
        .unwrap_or(0);
    let count_req = config.threshold_count.unwrap_or(0);

    Some(percent_req.max(count_req))
}

/// Whether the phase should end its timer early.
pub fn should_auto_advance(
    config: &ThresholdConfig,
    total_participants: u32,
    participated: u32,
) -> bool {
    match required_count(config, total_participants) {
        Some(required) => participated >= required,
        None => false,
    }
}

/// Human-readable explanation of the requirement, for logs.
pub fn explain(config: &ThresholdConfig, total_participants: u32) -> String {
    if config.is_disabled() {
        return "early advance disabled (no thresholds set)".to_string();
    }

    let mut parts = Vec::new();
    if let Some(pct) = config.threshold_percent {
        parts.push(format!(
            "{}% of {} = {}",
            pct,
            total_participants,
            percent_required(total_participants, pct)
        ));
    }
    if let Some(count) = config.threshold_count {
        parts.push(format!("count threshold = {}", count));
    }

    let required = required_count(config, total_participants).unwrap_or(0);
    format!("MAX({}) = {} required", parts.join(", "), required)
}
