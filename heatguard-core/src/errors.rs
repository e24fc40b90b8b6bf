//! Error Types for Rejected Readings
//!
//! ## Design Philosophy
//!
//! A bad value must never reach a Kalman filter. A single NaN multiplied
//! through `F·P·Fᵀ` poisons the covariance of that channel for the rest of the
//! process lifetime, and there is no way back short of rebuilding the filter.
//! So every reading is checked *before* the predict step runs, and a failed
//! check leaves the channel exactly as it was.
//!
//! The error type follows the same rules as the rest of the core:
//!
//! 1. **Small and `Copy`**: errors are returned on the ingest path and may be
//!    collected per update (at most one per channel).
//! 2. **No heap**: only inline data and `&'static str`.
//! 3. **Actionable**: each variant names the channel so the caller can decide
//!    whether to hold the last good value or drop the whole update.
//!
//! ## Error Categories
//!
//! ### Per-channel
//! - `InvalidValue`: NaN or infinity
//! - `OutOfRange`: finite but outside the channel's physical range
//!
//! ### Per-update
//! - `NoUsableChannels`: every channel in the update was rejected
//!
//! ## Handling Strategy
//!
//! ```rust
//! use heatguard_core::{Channel, ReadingError};
//!
//! fn on_reject(err: ReadingError) {
//!     match err {
//!         ReadingError::InvalidValue { channel } => {
//!             // Sensor returned garbage; keep the last filtered value
//!             let _ = channel;
//!         }
//!         ReadingError::OutOfRange { channel, value, .. } => {
//!             // Probe detached or miscalibrated
//!             let _ = (channel, value);
//!         }
//!         ReadingError::NoUsableChannels => {
//!             // Nothing to assess this cycle
//!         }
//!     }
//! }
//! # on_reject(ReadingError::InvalidValue { channel: Channel::SpO2 });
//! ```

use thiserror_no_std::Error;

use crate::channel::Channel;

/// Result type for reading validation and ingestion
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Reasons a reading is refused before it reaches a filter
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ReadingError {
    /// Value is NaN or infinite
    #[error("Invalid value on {channel}: not a finite number")]
    InvalidValue {
        /// Channel that produced the value
        channel: Channel,
    },

    /// Value outside the channel's physical range
    #[error("Value {value} on {channel} outside range [{min}, {max}]")]
    OutOfRange {
        /// Channel that produced the value
        channel: Channel,
        /// The rejected reading
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },

    /// Every channel in the update was rejected
    #[error("No usable channels in update")]
    NoUsableChannels,
}

impl ReadingError {
    /// Channel the error is attributed to, if it is a per-channel error
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Self::InvalidValue { channel } => Some(*channel),
            Self::OutOfRange { channel, .. } => Some(*channel),
            Self::NoUsableChannels => None,
        }
    }
}
