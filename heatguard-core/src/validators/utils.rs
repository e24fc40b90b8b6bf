//! Shared validation helpers
//!
//! Pure functions, no allocation, no side effects. Every channel validator
//! runs the same two checks in the same order: finiteness first (a NaN
//! compares false against any bound, so it would slip past a range check),
//! then the physical range.

use crate::{
    channel::Channel,
    errors::{ReadingError, ReadingResult},
    traits::Validatable,
};

/// Reject NaN and infinities
pub fn check_finite(channel: Channel, value: f64) -> ReadingResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ReadingError::InvalidValue { channel })
    }
}

/// Check if a value is within the inclusive range `[min, max]`
pub fn check_range(channel: Channel, value: f64, min: f64, max: f64) -> ReadingResult<()> {
    if value < min || value > max {
        Err(ReadingError::OutOfRange {
            channel,
            value,
            min,
            max,
        })
    } else {
        Ok(())
    }
}
