//! Kalman Tuning Constants
//!
//! Each channel runs a constant-velocity filter with a diagonal process noise
//! `Q = q·I` and a scalar measurement noise `R`. The values are design
//! constants chosen per physical quantity, not learned.
//!
//! ```text
//! Channel           q       R       Character
//! AtmosphericTemp   1e-5    1e-2    slow drift, precise probe
//! Humidity          5e-5    2.5e-2  moderate variability
//! BodyTemp          1e-5    0.3     smooth, tolerates ±2°C jitter
//! SpO2              5e-5    0.2     reactive enough to cross 95% quickly
//! HeartRate         1e-6    1.0     rigid, suppresses erratic PPG spikes
//! ```

/// Initial variance on both state components.
///
/// Large enough to mean "no prior knowledge": the first measurement gets a
/// gain within a few parts per million of 1.
pub const INITIAL_COVARIANCE: f64 = 1e6;

/// Decimal places kept when a filtered value is reported.
pub const REPORT_DECIMALS: i32 = 3;

// ===== ATMOSPHERIC TEMPERATURE =====

/// Process noise for ambient temperature.
pub const ATM_TEMP_PROCESS_NOISE: f64 = 1e-5;

/// Measurement noise for ambient temperature.
pub const ATM_TEMP_MEASUREMENT_NOISE: f64 = 1e-2;

// ===== HUMIDITY =====

/// Process noise for relative humidity.
pub const HUMIDITY_PROCESS_NOISE: f64 = 5e-5;

/// Measurement noise for relative humidity.
pub const HUMIDITY_MEASUREMENT_NOISE: f64 = 2.5e-2;

// ===== BODY TEMPERATURE =====

/// Process noise for body temperature.
pub const BODY_TEMP_PROCESS_NOISE: f64 = 1e-5;

/// Measurement noise for body temperature.
pub const BODY_TEMP_MEASUREMENT_NOISE: f64 = 0.3;

// ===== SPO2 =====

/// Process noise for blood oxygen saturation.
pub const SPO2_PROCESS_NOISE: f64 = 5e-5;

/// Measurement noise for blood oxygen saturation.
pub const SPO2_MEASUREMENT_NOISE: f64 = 0.2;

// ===== HEART RATE =====

/// Process noise for heart rate.
pub const HEART_RATE_PROCESS_NOISE: f64 = 1e-6;

/// Measurement noise for heart rate.
pub const HEART_RATE_MEASUREMENT_NOISE: f64 = 1.0;
