//! Risk Scoring Constants
//!
//! Weights, reference values and classification thresholds for the
//! heatstroke risk score. All scores are on a 0–100 scale.
//!
//! ## Instantaneous score
//!
//! ```text
//! solar = max(0, (atmTemp - 15) × 50)
//!
//! score = bodyTemp/42   × 40
//!       + heartRate/200 × 25
//!       + humidity/100  × 20
//!       + solar/1000    × 10
//!       - spo2/100      × 15
//! ```
//!
//! Low saturation raises the score by subtracting less; the SpO2 term is
//! a credit, not a penalty.

// ===== SCORE BOUNDS =====

/// Lowest possible score
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible score
pub const MAX_SCORE: f64 = 100.0;

/// Decimal places kept in a reported score
pub const SCORE_DECIMALS: i32 = 2;

// ===== WEIGHTS =====

/// Body temperature at which the body term reaches its full weight (°C)
pub const BODY_TEMP_REFERENCE_C: f64 = 42.0;

/// Weight of the body temperature term
pub const BODY_TEMP_WEIGHT: f64 = 40.0;

/// Heart rate at which the heart term reaches its full weight (bpm)
pub const HEART_RATE_REFERENCE_BPM: f64 = 200.0;

/// Weight of the heart rate term
pub const HEART_RATE_WEIGHT: f64 = 25.0;

/// Weight of the humidity term (reference is 100%)
pub const HUMIDITY_WEIGHT: f64 = 20.0;

/// Weight of the solar load term
pub const SOLAR_WEIGHT: f64 = 10.0;

/// Solar proxy at which the solar term reaches its full weight
pub const SOLAR_REFERENCE: f64 = 1000.0;

/// Ambient temperature below which there is no solar load (°C)
pub const SOLAR_BASE_TEMP_C: f64 = 15.0;

/// Solar proxy units per °C above the base temperature
pub const SOLAR_GAIN_PER_C: f64 = 50.0;

/// Weight of the SpO2 credit (reference is 100%)
pub const SPO2_WEIGHT: f64 = 15.0;

// ===== CLASSIFICATION =====

/// Window mean above which the subject is unstable
pub const UNSTABLE_AVERAGE: f64 = 80.0;

/// Window mean above which the subject needs closer monitoring
pub const MONITOR_AVERAGE: f64 = 60.0;

/// Margin above the window mean that makes an entry a spike
pub const SPIKE_MARGIN: f64 = 10.0;

/// Spike count above which the subject needs closer monitoring
pub const SPIKE_COUNT_LIMIT: usize = 5;

// ===== HISTORIES =====

/// Adjusted scores in the classification window.
///
/// 30 updates at the 1 Hz reporting rate: half a minute of context, long
/// enough that a single bad sample cannot flip the status.
pub const RISK_WINDOW_SIZE: usize = 30;

/// Assessments retained for history and reports
pub const ASSESSMENT_HISTORY_SIZE: usize = 100;

/// Vitals snapshots retained for reports
pub const VITALS_HISTORY_SIZE: usize = 100;

// ===== REPORTS =====

/// Largest rolling window used by trend and volatility reports
pub const ROLLING_WINDOW: usize = 5;

/// Entries needed before any time-series report can be produced
pub const MIN_REPORT_ENTRIES: usize = 2;

/// Hours in a forecast batch from the external model
pub const FORECAST_HORIZON_HOURS: usize = 24;
