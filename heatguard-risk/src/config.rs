//! Monitor configuration
//!
//! Everything has a default matching the deployed wearable, so
//! `MonitorConfig::default()` is a working setup. Overrides come either from
//! the `with_*` builders or from a JSON document in which every field is
//! optional:
//!
//! ```rust
//! use heatguard_risk::MonitorConfig;
//!
//! let config = MonitorConfig::from_json(r#"{
//!     "thresholds": { "unstable_average": 75.0 },
//!     "filters": { "missing": "CarryForward" }
//! }"#)?;
//!
//! assert_eq!(config.thresholds.unstable_average, 75.0);
//! assert_eq!(config.thresholds.monitor_average, 60.0);
//! # Ok::<(), heatguard_risk::ConfigError>(())
//! ```

use heatguard_core::{
    Channel, ChannelTuning, FilterBankConfig, InvalidReadingPolicy, MissingChannelPolicy,
};
use serde::{Deserialize, Serialize};

use crate::{constants::*, errors::ConfigError};

/// Status classification thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Window mean above which the status is Unstable
    pub unstable_average: f64,
    /// Window mean above which the status is Monitor Closely
    pub monitor_average: f64,
    /// Margin above the window mean that counts as a spike
    pub spike_margin: f64,
    /// Spike count above which the status is Monitor Closely
    pub spike_count: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            unstable_average: UNSTABLE_AVERAGE,
            monitor_average: MONITOR_AVERAGE,
            spike_margin: SPIKE_MARGIN,
            spike_count: SPIKE_COUNT_LIMIT,
        }
    }
}

impl RiskThresholds {
    /// Set the Unstable threshold
    pub fn with_unstable_average(mut self, average: f64) -> Self {
        self.unstable_average = average;
        self
    }

    /// Set the Monitor Closely threshold
    pub fn with_monitor_average(mut self, average: f64) -> Self {
        self.monitor_average = average;
        self
    }

    /// Set the spike margin and count limit
    pub fn with_spikes(mut self, margin: f64, count: usize) -> Self {
        self.spike_margin = margin.abs();
        self.spike_count = count;
        self
    }
}

/// Complete monitor configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Filter tuning and input policies
    pub filters: FilterBankConfig,
    /// Classification thresholds
    pub thresholds: RiskThresholds,
}

impl MonitorConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MonitorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if !(t.monitor_average.is_finite() && t.unstable_average.is_finite()) {
            return Err(ConfigError::Invalid("thresholds must be finite"));
        }
        if t.monitor_average > t.unstable_average {
            return Err(ConfigError::Invalid("monitor_average exceeds unstable_average"));
        }
        if !t.spike_margin.is_finite() || t.spike_margin < 0.0 {
            return Err(ConfigError::Invalid("spike_margin must be finite and non-negative"));
        }

        for tuning in &self.filters.tunings {
            let values = [tuning.process_noise, tuning.measurement_noise, tuning.initial_covariance];
            if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ConfigError::Invalid("filter noise must be finite and non-negative"));
            }
            if tuning.measurement_noise == 0.0 && tuning.initial_covariance == 0.0 {
                return Err(ConfigError::Invalid("measurement noise and initial covariance both zero"));
            }
        }

        Ok(())
    }

    /// Set classification thresholds
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Override one channel's filter tuning
    pub fn with_tuning(mut self, channel: Channel, tuning: ChannelTuning) -> Self {
        self.filters = self.filters.with_tuning(channel, tuning);
        self
    }

    /// Set the missing-channel policy
    pub fn with_missing_policy(mut self, policy: MissingChannelPolicy) -> Self {
        self.filters = self.filters.with_missing_policy(policy);
        self
    }

    /// Set the invalid-reading policy
    pub fn with_invalid_policy(mut self, policy: InvalidReadingPolicy) -> Self {
        self.filters = self.filters.with_invalid_policy(policy);
        self
    }

    /// Toggle physical range enforcement
    pub fn with_range_enforcement(mut self, enforce: bool) -> Self {
        self.filters = self.filters.with_range_enforcement(enforce);
        self
    }
}
