//! Constants for HeatGuard Core
//!
//! Centralized numeric constants for the filter bank and channel validation.
//! Every value carries its unit in the name and a note on where it comes from.
//!
//! ## Organization
//!
//! - **Sensors**: physical ranges accepted per channel
//! - **Filter**: per-channel Kalman tuning and the initial uncertainty
//! - **Buffers**: capacities of the bounded histories
//!
//! Use these instead of magic numbers. Risk scoring thresholds live with the
//! risk engine in `heatguard-risk`, not here.

/// Physical input ranges for each wearable/environment channel.
pub mod sensors;

/// Kalman tuning constants (Q, R, initial covariance) per channel.
pub mod filter;

/// Capacities of the bounded history buffers.
pub mod buffers;

pub use sensors::{
    ATM_TEMP_MIN_C, ATM_TEMP_MAX_C,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
    BODY_TEMP_MIN_C, BODY_TEMP_MAX_C,
    SPO2_MIN_PCT, SPO2_MAX_PCT,
    HEART_RATE_MIN_BPM, HEART_RATE_MAX_BPM,
};

pub use filter::{INITIAL_COVARIANCE, REPORT_DECIMALS};

pub use buffers::{SAMPLE_HISTORY_SIZE, CHANNEL_COUNT};
