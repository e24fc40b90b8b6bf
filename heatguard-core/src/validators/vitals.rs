//! Per-channel range validator
//!
//! Validates a raw reading against the physical range of its channel:
//! - Non-finite values are always rejected
//! - Finite values outside `[min, max]` are rejected unless range
//!   enforcement is switched off

use crate::{
    channel::Channel,
    constants::sensors::*,
    errors::ReadingResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Range validator for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelValidator {
    channel: Channel,
    min: f64,
    max: f64,
    enforce_range: bool,
}

impl ChannelValidator {
    /// Validator with the documented physical range of `channel`
    pub const fn for_channel(channel: Channel) -> Self {
        let (min, max) = match channel {
            Channel::AtmosphericTemp => (ATM_TEMP_MIN_C, ATM_TEMP_MAX_C),
            Channel::Humidity => (HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT),
            Channel::BodyTemp => (BODY_TEMP_MIN_C, BODY_TEMP_MAX_C),
            Channel::SpO2 => (SPO2_MIN_PCT, SPO2_MAX_PCT),
            Channel::HeartRate => (HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM),
        };

        Self {
            channel,
            min,
            max,
            enforce_range: true,
        }
    }

    /// Create validator with custom limits
    pub fn new_with_limits(channel: Channel, min: f64, max: f64) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            channel,
            min,
            max,
            enforce_range: true,
        }
    }

    /// Only reject non-finite values, accept any finite magnitude
    pub fn finite_only(mut self) -> Self {
        self.enforce_range = false;
        self
    }

    /// Toggle range enforcement
    pub fn with_range_enforced(mut self, enforce: bool) -> Self {
        self.enforce_range = enforce;
        self
    }

    /// Channel this validator guards
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Whether finite out-of-range values are rejected
    pub fn enforces_range(&self) -> bool {
        self.enforce_range
    }
}

impl Validator for ChannelValidator {
    type Value = f64;

    fn validate(&self, value: f64) -> ReadingResult<()> {
        utils::check_finite(self.channel, value)?;

        if self.enforce_range {
            utils::check_range(self.channel, value, self.min, self.max)?;
        }

        Ok(())
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            channel: self.channel,
            min_value: self.min,
            max_value: self.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReadingError;

    #[test]
    fn typical_vitals_pass() {
        let readings = [
            (Channel::AtmosphericTemp, 30.0),
            (Channel::Humidity, 50.0),
            (Channel::BodyTemp, 37.0),
            (Channel::SpO2, 98.0),
            (Channel::HeartRate, 80.0),
        ];

        for (channel, value) in readings {
            assert!(ChannelValidator::for_channel(channel).validate(value).is_ok());
        }
    }

    #[test]
    fn zero_fill_passes_every_channel() {
        for channel in Channel::ALL {
            assert!(ChannelValidator::for_channel(channel).validate(0.0).is_ok());
        }
    }

    #[test]
    fn detached_probe_rejected() {
        // DS18B20 reports -127°C when the probe is disconnected
        let result = ChannelValidator::for_channel(Channel::BodyTemp).validate(-127.0);
        assert!(matches!(
            result,
            Err(ReadingError::OutOfRange { channel: Channel::BodyTemp, .. })
        ));
    }

    #[test]
    fn finite_only_still_rejects_nan() {
        let validator = ChannelValidator::for_channel(Channel::BodyTemp).finite_only();
        assert!(validator.validate(1000.0).is_ok());
        assert!(validator.validate(f64::NAN).is_err());
    }

    #[test]
    fn custom_limits_are_ordered() {
        let validator = ChannelValidator::new_with_limits(Channel::HeartRate, 220.0, 30.0);
        let constraints = validator.constraints();
        assert_eq!(constraints.min_value, 30.0);
        assert_eq!(constraints.max_value, 220.0);
        assert!(validator.validate(25.0).is_err());
    }
}
