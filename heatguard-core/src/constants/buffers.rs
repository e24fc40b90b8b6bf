//! Buffer Sizes
//!
//! Capacities for the bounded histories kept by the filter bank. All of them
//! are compile-time constants so the buffers can live on the stack or in a
//! `static` on targets without an allocator.

/// Number of channels in one vitals update.
///
/// Atmospheric temperature, humidity, body temperature, SpO2, heart rate.
pub const CHANNEL_COUNT: usize = 5;

/// Raw and filtered samples retained per channel.
///
/// 100 samples at the 1 Hz reporting rate of the wearable is a little over
/// a minute and a half, enough for a raw-vs-filtered diagnostic chart.
///
/// Memory: 2 × 5 × 100 × 8 bytes = 8KB.
pub const SAMPLE_HISTORY_SIZE: usize = 100;
