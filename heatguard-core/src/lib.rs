//! Core filtering engine for HeatGuard
//!
//! Turns noisy wearable and environment readings into smoothed per-channel
//! values: input validation followed by one constant-velocity Kalman filter
//! per channel.
//!
//! Key constraints:
//! - Runs without `std` (the wearable hub is an ESP32)
//! - No heap allocation on the ingest path
//! - A rejected reading never reaches a filter
//!
//! ```rust
//! use heatguard_core::{Channel, FilterBank, RawVitals};
//!
//! let mut bank = FilterBank::default();
//!
//! // Heart rate missing from this update: zero-filled by default
//! let raw = RawVitals::new()
//!     .with(Channel::AtmosphericTemp, 31.0)
//!     .with(Channel::BodyTemp, 37.4);
//!
//! match bank.ingest_all(&raw) {
//!     Ok(update) => assert!(update.reading.body_temp() > 37.0),
//!     Err(e) => panic!("{e:?}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod buffer;
pub mod channel;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod math;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use channel::{Channel, RawVitals, VitalsReading};
pub use errors::{ReadingError, ReadingResult};
pub use filter::{
    BankUpdate, ChannelHistory, ChannelTuning, FilterBank, FilterBankConfig,
    InvalidReadingPolicy, MissingChannelPolicy,
};
pub use math::round_to;
pub use time::{FixedTime, TimeSource, Timestamp};
#[cfg(feature = "std")]
pub use time::SystemTime;
pub use traits::{Validator, ValidatorConstraints};
pub use validators::ChannelValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
