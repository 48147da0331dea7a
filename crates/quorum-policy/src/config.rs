//! Host-configured advancement thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds a host configures for the proposing phase of a round.
///
/// Two of the thresholds gate early advancement (percent and count), while
/// `proposing_minimum` is an absolute floor below which advancing is never
/// meaningful, whether the round ends early or by timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Required participation as a percentage of the group.
    ///
    /// Conventionally 0-100. Values above 100 are not clamped; they make
    /// the percent gate unsatisfiable and are useful for edge-case probing.
    pub threshold_percent: u32,

    /// Minimum absolute number of submissions required.
    pub threshold_count: u32,

    /// Absolute floor of submissions below which a round never advances.
    pub proposing_minimum: u32,
}

impl RoundConfig {
    /// Creates a config from the three thresholds.
    pub fn new(threshold_percent: u32, threshold_count: u32, proposing_minimum: u32) -> Self {
        Self {
            threshold_percent,
            threshold_count,
            proposing_minimum,
        }
    }

    /// Sets the percent threshold.
    pub fn with_threshold_percent(mut self, percent: u32) -> Self {
        self.threshold_percent = percent;
        self
    }

    /// Sets the count threshold.
    pub fn with_threshold_count(mut self, count: u32) -> Self {
        self.threshold_count = count;
        self
    }

    /// Sets the proposing minimum.
    pub fn with_proposing_minimum(mut self, minimum: u32) -> Self {
        self.proposing_minimum = minimum;
        self
    }
}

impl Default for RoundConfig {
    /// The typical host configuration: 80% participation, 5 submissions,
    /// minimum of 3 propositions.
    fn default() -> Self {
        Self {
            threshold_percent: 80,
            threshold_count: 5,
            proposing_minimum: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoundConfig::default();
        assert_eq!(config.threshold_percent, 80);
        assert_eq!(config.threshold_count, 5);
        assert_eq!(config.proposing_minimum, 3);
    }

    #[test]
    fn test_builder_setters() {
        let config = RoundConfig::default()
            .with_threshold_percent(100)
            .with_threshold_count(8)
            .with_proposing_minimum(4);
        assert_eq!(config.threshold_percent, 100);
        assert_eq!(config.threshold_count, 8);
        assert_eq!(config.proposing_minimum, 4);
    }

    #[test]
    fn test_config_serialization() {
        let config = RoundConfig::new(80, 5, 3);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
