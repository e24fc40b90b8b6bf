//! Forecast baseline input
//!
//! A separate model forecasts body temperature for the next day; the engine
//! only consumes one number from it, the baseline, and compares each
//! filtered body temperature against that. The model is refreshed rarely
//! (on a schedule, not per update), so the monitor caches the baseline and
//! providers are consulted only on [`refresh`](crate::HeatMonitor::refresh_forecast).

use serde::Serialize;

use crate::{constants::FORECAST_HORIZON_HOURS, errors::{ReportError, ReportResult}};

/// Source of the body temperature baseline
pub trait ForecastProvider {
    /// Baseline body temperature (°C), `None` if no forecast is available
    fn body_temp_baseline(&self) -> Option<f64>;
}

/// Fixed baseline, e.g. from a config file or a test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticBaseline(pub f64);

impl ForecastProvider for StaticBaseline {
    fn body_temp_baseline(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// Summary statistics of a forecast batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastDistribution {
    /// Number of points
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value (mean of the two middle values for even counts)
    pub median: f64,
    /// Population standard deviation
    #[serde(rename = "std")]
    pub std_dev: f64,
    /// Smallest point
    pub min: f64,
    /// Largest point
    pub max: f64,
}

/// One run of the forecasting model: predicted body temperatures
///
/// Usually [`FORECAST_HORIZON_HOURS`] hourly points. Non-finite points are
/// dropped on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastBatch {
    points: Vec<f64>,
}

impl ForecastBatch {
    /// Batch from predicted body temperatures
    pub fn new(points: impl IntoIterator<Item = f64>) -> Self {
        points.into_iter().collect()
    }

    /// Predicted points in forecast order
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for an empty batch
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the batch covers the full forecast horizon
    pub fn is_complete(&self) -> bool {
        self.points.len() >= FORECAST_HORIZON_HOURS
    }

    /// Mean of the points
    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.points.iter().sum::<f64>() / self.points.len() as f64)
    }

    /// Distribution statistics
    pub fn distribution(&self) -> ReportResult<ForecastDistribution> {
        let mean = self.mean().ok_or(ReportError::EmptyForecast)?;
        let count = self.points.len();

        let mut sorted = self.points.clone();
        sorted.sort_by(f64::total_cmp);

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        let variance = self.points.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / count as f64;

        Ok(ForecastDistribution {
            count,
            mean,
            median,
            std_dev: variance.sqrt(),
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

impl FromIterator<f64> for ForecastBatch {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().filter(|p| p.is_finite()).collect(),
        }
    }
}

impl ForecastProvider for ForecastBatch {
    fn body_temp_baseline(&self) -> Option<f64> {
        self.mean()
    }
}
