//! Physical Input Ranges per Channel
//!
//! These bound what a reading may be before it is allowed to touch a filter.
//! They are deliberately wide: the goal is to reject sensor garbage (a
//! disconnected probe reporting -127, a NaN from a failed I2C read), not to
//! second-guess physiology.
//!
//! Zero must stay inside every range, because a channel that is absent from
//! an update is zero-filled by default and has to pass the same check.

// ===== ATMOSPHERIC TEMPERATURE (V0) =====

/// Lowest accepted ambient temperature (°C).
///
/// Coldest natural surface temperature recorded is -89.2°C; wearable
/// ambient probes are rated to about -40°C. -80°C leaves headroom.
pub const ATM_TEMP_MIN_C: f64 = -80.0;

/// Highest accepted ambient temperature (°C).
///
/// Hottest reliable air temperature recorded is ~56.7°C; 70°C covers
/// probes sitting in direct sun on a dark surface.
pub const ATM_TEMP_MAX_C: f64 = 70.0;

// ===== RELATIVE HUMIDITY (V1) =====

/// Lowest accepted relative humidity (%).
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Highest accepted relative humidity (%).
pub const HUMIDITY_MAX_PCT: f64 = 100.0;

// ===== BODY TEMPERATURE (V2) =====

/// Lowest accepted body temperature (°C).
///
/// Skin probes read far below core temperature when detached; the floor
/// is 0 so a zero-filled channel still validates.
pub const BODY_TEMP_MIN_C: f64 = 0.0;

/// Highest accepted body temperature (°C).
///
/// Core temperatures above ~46.5°C have not been survived; 50°C is the
/// probe's rated maximum.
pub const BODY_TEMP_MAX_C: f64 = 50.0;

// ===== BLOOD OXYGEN SATURATION (V3) =====

/// Lowest accepted SpO2 (%).
pub const SPO2_MIN_PCT: f64 = 0.0;

/// Highest accepted SpO2 (%).
pub const SPO2_MAX_PCT: f64 = 100.0;

// ===== HEART RATE (V4) =====

/// Lowest accepted heart rate (bpm).
///
/// 0 is what a PPG sensor reports with no skin contact.
pub const HEART_RATE_MIN_BPM: f64 = 0.0;

/// Highest accepted heart rate (bpm).
///
/// Maximum recorded human heart rate is ~300 bpm (infant SVT).
pub const HEART_RATE_MAX_BPM: f64 = 300.0;
