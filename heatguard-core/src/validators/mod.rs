//! Physics-Based Input Validation
//!
//! ## Overview
//!
//! A Kalman filter has no notion of a "bad" measurement: it blends whatever
//! it is given into its state. One NaN turns the covariance into NaN and the
//! channel never recovers; one `-127` from a detached probe drags the body
//! temperature estimate down for dozens of updates. Validation is the gate in
//! front of every filter.
//!
//! ## Validation Layers
//!
//! ### 1. Numeric validity
//! NaN and ±∞ are always rejected. This layer cannot be disabled.
//!
//! ### 2. Physical range
//! Each channel has a documented range in
//! [`constants::sensors`](crate::constants::sensors):
//!
//! ```text
//! AtmosphericTemp  [-80, 70] °C
//! Humidity         [0, 100]  %
//! BodyTemp         [0, 50]   °C
//! SpO2             [0, 100]  %
//! HeartRate        [0, 300]  bpm
//! ```
//!
//! Zero is inside every range on purpose: a channel missing from an update
//! is zero-filled by default and must survive its own validator.
//!
//! Range enforcement can be switched off per validator, leaving only the
//! numeric check (useful when replaying recorded data with unusual units).
//!
//! ## Usage Example
//!
//! ```rust
//! use heatguard_core::{Channel, Validator};
//! use heatguard_core::validators::ChannelValidator;
//!
//! let spo2 = ChannelValidator::for_channel(Channel::SpO2);
//! assert!(spo2.validate(97.0).is_ok());
//! assert!(spo2.validate(f64::NAN).is_err());
//! assert!(spo2.validate(140.0).is_err());
//! # Ok::<(), heatguard_core::ReadingError>(())
//! ```

mod utils;
mod vitals;

pub use utils::{check_finite, check_range};
pub use vitals::ChannelValidator;
