//! Read-only time-series reports
//!
//! Each report turns a history into the series a dashboard plots. Rendering
//! is left to the caller; reports carry data only and serialize to JSON.
//!
//! Every report needs at least two entries, a one-point series has no trend
//! to show.
//!
//! ## Rolling statistics
//!
//! Trend and volatility use a window of `min(5, n)` entries. Positions before
//! the first full window are reported as 0 so every series has the same
//! length as its timestamps.
//!
//! ```text
//! scores         10   20   30   40   50   60
//! rolling mean    0    0    0    0   30   40      window 5
//! ```

use serde::Serialize;

use crate::{
    assessment::{to_rfc3339, Assessment, Status, VitalsSnapshot},
    config::RiskThresholds,
    constants::{MIN_REPORT_ENTRIES, ROLLING_WINDOW},
    errors::{ReportError, ReportResult},
};

/// Rolling mean of the assessment scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    /// RFC 3339 timestamps
    pub timestamps: Vec<String>,
    /// Scores in assessment order
    #[serde(rename = "risk_values")]
    pub scores: Vec<f64>,
    /// Rolling mean, 0 before the first full window
    pub rolling_mean: Vec<f64>,
    /// Window used
    pub window: usize,
}

/// Rolling sample standard deviation of the assessment scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityReport {
    /// RFC 3339 timestamps
    pub timestamps: Vec<String>,
    /// Scores in assessment order
    #[serde(rename = "risk_values")]
    pub scores: Vec<f64>,
    /// Rolling standard deviation (n - 1), 0 before the first full window
    pub volatility: Vec<f64>,
    /// Window used
    pub window: usize,
}

/// Body temperature, heart rate and SpO2 over time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsSeries {
    /// RFC 3339 timestamps
    pub timestamps: Vec<String>,
    /// Filtered body temperature (°C)
    #[serde(rename = "body_temperature")]
    pub body_temp: Vec<f64>,
    /// Filtered heart rate (bpm)
    pub heart_rate: Vec<f64>,
    /// Filtered SpO2 (%)
    pub spo2: Vec<f64>,
}

/// Scores and statuses over time with the threshold lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSeries {
    /// RFC 3339 timestamps
    pub timestamps: Vec<String>,
    /// Scores in assessment order
    #[serde(rename = "risk_values")]
    pub scores: Vec<f64>,
    /// Status of each assessment
    pub statuses: Vec<Status>,
    /// Monitor Closely line
    pub warning_threshold: f64,
    /// Unstable line
    pub critical_threshold: f64,
}

fn require_history(available: usize) -> ReportResult<()> {
    if available < MIN_REPORT_ENTRIES {
        return Err(ReportError::InsufficientHistory {
            required: MIN_REPORT_ENTRIES,
            available,
        });
    }
    Ok(())
}

fn timestamps(stamps: impl Iterator<Item = u64>) -> Vec<String> {
    stamps
        .map(|ts| to_rfc3339(ts).unwrap_or_else(|| ts.to_string()))
        .collect()
}

/// Window for `n` entries
pub fn rolling_window(n: usize) -> usize {
    ROLLING_WINDOW.min(n)
}

/// Rolling mean over `window`, 0 before the first full window
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |slice| slice.iter().sum::<f64>() / slice.len() as f64)
}

/// Rolling sample standard deviation over `window`, 0 before the first full
/// window and for windows of one entry
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    rolling(values, window, |slice| {
        if slice.len() < 2 {
            return 0.0;
        }
        let mean = slice.iter().sum::<f64>() / slice.len() as f64;
        let sum_sq: f64 = slice.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (slice.len() - 1) as f64).sqrt()
    })
}

fn rolling(values: &[f64], window: usize, stat: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    if window == 0 {
        return vec![0.0; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                0.0
            } else {
                stat(&values[i + 1 - window..=i])
            }
        })
        .collect()
}

/// Rolling mean of assessment scores
pub fn trend_report(history: &[Assessment]) -> ReportResult<TrendReport> {
    require_history(history.len())?;

    let scores: Vec<f64> = history.iter().map(|a| a.score).collect();
    let window = rolling_window(scores.len());

    Ok(TrendReport {
        timestamps: timestamps(history.iter().map(|a| a.timestamp)),
        rolling_mean: rolling_mean(&scores, window),
        scores,
        window,
    })
}

/// Rolling standard deviation of assessment scores
pub fn volatility_report(history: &[Assessment]) -> ReportResult<VolatilityReport> {
    require_history(history.len())?;

    let scores: Vec<f64> = history.iter().map(|a| a.score).collect();
    let window = rolling_window(scores.len());

    Ok(VolatilityReport {
        timestamps: timestamps(history.iter().map(|a| a.timestamp)),
        volatility: rolling_std(&scores, window),
        scores,
        window,
    })
}

/// Vital signs series from the snapshot history
pub fn vitals_series(history: &[VitalsSnapshot]) -> ReportResult<VitalsSeries> {
    require_history(history.len())?;

    Ok(VitalsSeries {
        timestamps: timestamps(history.iter().map(|s| s.timestamp)),
        body_temp: history.iter().map(|s| s.vitals.body_temp()).collect(),
        heart_rate: history.iter().map(|s| s.vitals.heart_rate()).collect(),
        spo2: history.iter().map(|s| s.vitals.spo2()).collect(),
    })
}

/// Score and status series with the configured threshold lines
pub fn risk_series(history: &[Assessment], thresholds: &RiskThresholds) -> ReportResult<RiskSeries> {
    require_history(history.len())?;

    Ok(RiskSeries {
        timestamps: timestamps(history.iter().map(|a| a.timestamp)),
        scores: history.iter().map(|a| a.score).collect(),
        statuses: history.iter().map(|a| a.status).collect(),
        warning_threshold: thresholds.monitor_average,
        critical_threshold: thresholds.unstable_average,
    })
}
