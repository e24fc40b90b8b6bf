//! Risk scoring and the classification window
//!
//! Scoring is a pure function of one filtered reading. The window is where
//! time enters: it keeps the most recent adjusted scores so the status is
//! decided on a trend, not on a single sample.

use heatguard_core::{buffer::CircularBuffer, VitalsReading};

use crate::constants::*;

/// Solar load proxy from ambient temperature
///
/// No dedicated irradiance sensor is fitted; ambient temperature above 15°C
/// stands in for it.
pub fn solar_proxy(atmospheric_temp: f64) -> f64 {
    ((atmospheric_temp - SOLAR_BASE_TEMP_C) * SOLAR_GAIN_PER_C).max(0.0)
}

/// Instantaneous risk from one filtered reading, clamped to `[0, 100]`
pub fn score_instantaneous(reading: &VitalsReading) -> f64 {
    let solar = solar_proxy(reading.atmospheric_temp());

    let score = reading.body_temp() / BODY_TEMP_REFERENCE_C * BODY_TEMP_WEIGHT
        + reading.heart_rate() / HEART_RATE_REFERENCE_BPM * HEART_RATE_WEIGHT
        + reading.humidity() / 100.0 * HUMIDITY_WEIGHT
        + solar / SOLAR_REFERENCE * SOLAR_WEIGHT
        - reading.spo2() / 100.0 * SPO2_WEIGHT;

    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Percentage deviation of body temperature from the forecast baseline
///
/// Zero when there is no usable baseline (absent, zero or non-finite).
pub fn forecast_deviation(body_temp: f64, forecast: Option<f64>) -> f64 {
    match forecast {
        Some(baseline) if baseline != 0.0 && baseline.is_finite() => {
            (body_temp - baseline).abs() / baseline * 100.0
        }
        _ => 0.0,
    }
}

/// Raise the instantaneous score by the forecast deviation
///
/// The sum is capped at 100 and floored at 0 (a negative baseline yields a
/// negative deviation).
pub fn adjust_for_forecast(instantaneous: f64, reading: &VitalsReading, forecast: Option<f64>) -> f64 {
    let deviation = forecast_deviation(reading.body_temp(), forecast);
    (instantaneous + deviation).clamp(MIN_SCORE, MAX_SCORE)
}

/// Trailing window of adjusted scores
#[derive(Debug, Clone, Default)]
pub struct RiskWindow {
    scores: CircularBuffer<f64, RISK_WINDOW_SIZE>,
}

impl RiskWindow {
    /// Empty window
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a score, evicting the oldest when full
    pub fn push(&mut self, score: f64) {
        self.scores.push(score);
    }

    /// Mean of the window, 0 when empty
    pub fn moving_average(&self) -> f64 {
        self.scores.mean().unwrap_or(0.0)
    }

    /// Entries strictly above `moving_average() + margin`
    pub fn spike_count(&self, margin: f64) -> usize {
        let limit = self.moving_average() + margin;
        self.scores.iter().filter(|&&s| s > limit).count()
    }

    /// Number of scores held
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True before the first push
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.scores.iter().copied()
    }

    /// Owned copy of the scores, oldest first
    pub fn to_vec(&self) -> Vec<f64> {
        self.scores.to_vec()
    }

    /// Drop all scores
    pub fn clear(&mut self) {
        self.scores.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(atm: f64, humidity: f64, body: f64, spo2: f64, heart: f64) -> VitalsReading {
        VitalsReading::from_array([atm, humidity, body, spo2, heart])
    }

    #[test]
    fn resting_score() {
        // 37/42×40 + 80/200×25 + 50/100×20 + 750/1000×10 - 98/100×15
        let score = score_instantaneous(&reading(30.0, 50.0, 37.0, 98.0, 80.0));
        let expected = 37.0 / 42.0 * 40.0 + 10.0 + 10.0 + 7.5 - 14.7;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn solar_proxy_is_zero_below_base() {
        assert_eq!(solar_proxy(10.0), 0.0);
        assert_eq!(solar_proxy(15.0), 0.0);
        assert_eq!(solar_proxy(16.0), 50.0);
    }

    #[test]
    fn score_is_clamped() {
        assert_eq!(score_instantaneous(&reading(70.0, 100.0, 1000.0, 0.0, 300.0)), 100.0);
        assert_eq!(score_instantaneous(&reading(0.0, 0.0, 0.0, 100.0, 0.0)), 0.0);
    }

    #[test]
    fn zero_or_missing_forecast_adds_nothing() {
        assert_eq!(forecast_deviation(39.0, Some(0.0)), 0.0);
        assert_eq!(forecast_deviation(39.0, None), 0.0);
        assert_eq!(forecast_deviation(39.0, Some(f64::NAN)), 0.0);
    }

    #[test]
    fn forecast_deviation_is_percentage() {
        assert!((forecast_deviation(38.5, Some(35.0)) - 10.0).abs() < 1e-9);
        assert!((forecast_deviation(31.5, Some(35.0)) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn adjustment_is_capped_and_floored() {
        let hot = reading(30.0, 50.0, 45.0, 98.0, 80.0);
        assert_eq!(adjust_for_forecast(95.0, &hot, Some(36.0)), 100.0);
        assert_eq!(adjust_for_forecast(5.0, &hot, Some(-36.0)), 0.0);
    }

    #[test]
    fn window_keeps_last_thirty() {
        let mut window = RiskWindow::new();
        for i in 0..35 {
            window.push(i as f64);
        }

        assert_eq!(window.len(), RISK_WINDOW_SIZE);
        let expected: Vec<f64> = (5..35).map(|i| i as f64).collect();
        assert_eq!(window.to_vec(), expected);
    }

    #[test]
    fn spikes_counted_above_margin() {
        let mut window = RiskWindow::new();
        for _ in 0..24 {
            window.push(45.0);
        }
        for _ in 0..6 {
            window.push(65.0);
        }
        // mean = (24×45 + 6×65) / 30 = 49, limit 59
        assert!((window.moving_average() - 49.0).abs() < 1e-9);
        assert_eq!(window.spike_count(SPIKE_MARGIN), 6);
    }
}
