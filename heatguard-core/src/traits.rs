//! Core traits for validators
//!
//! These traits define the interface every channel validator implements.
//! Keep them simple - the filter bank calls them once per channel per update.

use crate::channel::Channel;
use crate::errors::ReadingResult;

/// Core validator trait - implemented once per channel
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single reading before it reaches a filter
    fn validate(&self, value: Self::Value) -> ReadingResult<()>;

    /// Physical constraints enforced by this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Physical constraints for a channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorConstraints {
    /// Channel the constraints apply to
    pub channel: Channel,

    /// Minimum valid value (physics limit)
    pub min_value: f64,

    /// Maximum valid value (physics limit)
    pub max_value: f64,
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is numerically usable (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
