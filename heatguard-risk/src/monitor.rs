//! Thread-safe monitor facade
//!
//! [`HeatMonitor`] owns the filter bank, the risk engine and the cached
//! forecast baseline behind one `Mutex`. One update holds the lock for the
//! whole validate → filter → score → classify pipeline, so readers never see
//! a filtered reading without its assessment.
//!
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use heatguard_core::RawVitals;
//! use heatguard_risk::HeatMonitor;
//!
//! let monitor = Arc::new(HeatMonitor::default());
//!
//! let writer = {
//!     let monitor = Arc::clone(&monitor);
//!     thread::spawn(move || {
//!         let raw = RawVitals::complete([30.0, 50.0, 37.0, 98.0, 80.0]);
//!         monitor.ingest_vitals(&raw).map(|report| report.assessment.status)
//!     })
//! };
//!
//! let status = writer.join().unwrap()?;
//! assert_eq!(monitor.last_assessment()?.status, status);
//! # Ok::<(), heatguard_risk::MonitorError>(())
//! ```

use std::sync::{Mutex, MutexGuard};

use heatguard_core::{ChannelHistory, FilterBank, RawVitals, ReadingError, TimeSource};
use serde::Serialize;

use crate::{
    assessment::{Assessment, VitalsSnapshot},
    config::{MonitorConfig, RiskThresholds},
    engine::RiskEngine,
    errors::{ConfigError, MonitorError, MonitorResult, ReportResult},
    forecast::ForecastProvider,
    report::{self, RiskSeries, TrendReport, VitalsSeries, VolatilityReport},
};

/// Outcome of one update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestReport {
    /// Classification of the update
    pub assessment: Assessment,
    /// Channels held at their last value because their reading was rejected
    pub rejected: Vec<ReadingError>,
}

impl IngestReport {
    /// True if every channel was accepted
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[derive(Debug)]
struct MonitorState {
    bank: FilterBank,
    engine: RiskEngine,
    forecast: Option<f64>,
}

/// Filter bank and risk engine behind one lock
pub struct HeatMonitor {
    state: Mutex<MonitorState>,
    clock: Box<dyn TimeSource>,
    config: MonitorConfig,
}

impl HeatMonitor {
    /// Monitor stamped by the system clock
    ///
    /// `config` is taken as is; use [`try_new`](Self::try_new) for
    /// configurations assembled at runtime.
    pub fn new(config: MonitorConfig) -> Self {
        Self::with_time_source(config, heatguard_core::SystemTime)
    }

    /// Monitor stamped by the system clock, refusing an invalid `config`
    pub fn try_new(config: MonitorConfig) -> Result<Self, ConfigError> {
        Self::try_with_time_source(config, heatguard_core::SystemTime)
    }

    /// Monitor stamped by `clock`, refusing an invalid `config`
    pub fn try_with_time_source(
        config: MonitorConfig,
        clock: impl TimeSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_time_source(config, clock))
    }

    /// Monitor stamped by `clock`
    ///
    /// `config` is not validated.
    pub fn with_time_source(config: MonitorConfig, clock: impl TimeSource + 'static) -> Self {
        Self {
            state: Mutex::new(MonitorState {
                bank: FilterBank::new(config.filters),
                engine: RiskEngine::new(config.thresholds),
                forecast: None,
            }),
            clock: Box::new(clock),
            config,
        }
    }

    fn lock(&self) -> MonitorResult<MutexGuard<'_, MonitorState>> {
        self.state.lock().map_err(|_| MonitorError::Poisoned)
    }

    /// Filter, score and classify one update
    ///
    /// Fails without touching any state if the update is refused by the
    /// filter bank.
    pub fn ingest_vitals(&self, raw: &RawVitals) -> MonitorResult<IngestReport> {
        let mut state = self.lock()?;

        let update = state.bank.ingest_all(raw)?;
        let timestamp = self.clock.now();
        let forecast = state.forecast;
        let assessment = state.engine.assess(update.reading, forecast, timestamp);

        log::debug!(
            "Assessed update: risk {:.2}, status {}, {} channel(s) held",
            assessment.score,
            assessment.status,
            update.rejected.len()
        );

        Ok(IngestReport {
            assessment,
            rejected: update.rejected.into_iter().collect(),
        })
    }

    /// Most recent assessment, or the placeholder before the first update
    pub fn last_assessment(&self) -> MonitorResult<Assessment> {
        Ok(self.lock()?.engine.last_assessment())
    }

    /// Assessments oldest first
    pub fn assessment_history(&self) -> MonitorResult<Vec<Assessment>> {
        Ok(self.lock()?.engine.assessment_history())
    }

    /// Vitals snapshots oldest first
    pub fn vitals_history(&self) -> MonitorResult<Vec<VitalsSnapshot>> {
        Ok(self.lock()?.engine.vitals_history())
    }

    /// Raw and filtered samples per channel
    pub fn raw_and_filtered_history(&self) -> MonitorResult<ChannelHistory> {
        Ok(self.lock()?.bank.history())
    }

    /// Replace the cached forecast baseline
    ///
    /// Non-finite values are treated as no forecast.
    pub fn set_forecast_baseline(&self, baseline: Option<f64>) -> MonitorResult<()> {
        let baseline = baseline.filter(|b| b.is_finite());
        self.lock()?.forecast = baseline;
        log::info!("Forecast baseline set to {:?}", baseline);
        Ok(())
    }

    /// Pull a fresh baseline from `provider` and cache it
    pub fn refresh_forecast(&self, provider: &dyn ForecastProvider) -> MonitorResult<Option<f64>> {
        let baseline = provider.body_temp_baseline().filter(|b| b.is_finite());
        self.set_forecast_baseline(baseline)?;
        Ok(baseline)
    }

    /// Cached forecast baseline
    pub fn forecast_baseline(&self) -> MonitorResult<Option<f64>> {
        Ok(self.lock()?.forecast)
    }

    /// Rolling mean of assessment scores
    pub fn trend_report(&self) -> ReportResult<TrendReport> {
        report::trend_report(&self.assessment_history()?)
    }

    /// Rolling standard deviation of assessment scores
    pub fn volatility_report(&self) -> ReportResult<VolatilityReport> {
        report::volatility_report(&self.assessment_history()?)
    }

    /// Body temperature, heart rate and SpO2 over time
    pub fn vitals_series(&self) -> ReportResult<VitalsSeries> {
        report::vitals_series(&self.vitals_history()?)
    }

    /// Scores and statuses over time with threshold lines
    pub fn risk_series(&self) -> ReportResult<RiskSeries> {
        report::risk_series(&self.assessment_history()?, &self.config.thresholds)
    }

    /// Configuration the monitor was built with
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Classification thresholds
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.config.thresholds
    }

    /// Return every filter to rest and clear all histories
    ///
    /// The forecast baseline is kept.
    pub fn reset(&self) -> MonitorResult<()> {
        let mut state = self.lock()?;
        state.bank.reset();
        state.engine.reset();
        log::info!("Monitor reset");
        Ok(())
    }
}

impl Default for HeatMonitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default())
    }
}

impl std::fmt::Debug for HeatMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeatMonitor")
            .field("config", &self.config)
            .field("wall_clock", &self.clock.is_wall_clock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assessment::Status, forecast::StaticBaseline};
    use heatguard_core::{Channel, FixedTime, InvalidReadingPolicy};

    fn monitor() -> HeatMonitor {
        HeatMonitor::with_time_source(MonitorConfig::default(), FixedTime::new(1_700_000_000_000))
    }

    fn resting() -> RawVitals {
        RawVitals::complete([30.0, 50.0, 37.0, 98.0, 80.0])
    }

    #[test]
    fn placeholder_before_first_update() {
        let monitor = monitor();
        assert_eq!(monitor.last_assessment().unwrap().status, Status::WaitingForData);
        assert!(monitor.assessment_history().unwrap().is_empty());
    }

    #[test]
    fn resting_update_is_stable() {
        let monitor = monitor();
        let report = monitor.ingest_vitals(&resting()).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.assessment.status, Status::Stable);
        assert_eq!(report.assessment.timestamp, 1_700_000_000_000);
        assert_eq!(monitor.last_assessment().unwrap(), report.assessment);
    }

    #[test]
    fn refused_update_leaves_no_trace() {
        let monitor = HeatMonitor::with_time_source(
            MonitorConfig::default().with_invalid_policy(InvalidReadingPolicy::FailUpdate),
            FixedTime::new(0),
        );

        let result = monitor.ingest_vitals(&resting().with(Channel::SpO2, f64::NAN));

        assert!(matches!(result, Err(MonitorError::InvalidReading(_))));
        assert!(monitor.assessment_history().unwrap().is_empty());
        assert!(monitor.vitals_history().unwrap().is_empty());
        assert!(monitor.raw_and_filtered_history().unwrap().raw(Channel::SpO2).is_empty());
    }

    #[test]
    fn checked_constructor_refuses_invalid_thresholds() {
        let inverted = MonitorConfig::default()
            .with_thresholds(RiskThresholds::default().with_monitor_average(90.0));
        assert!(matches!(HeatMonitor::try_new(inverted), Err(ConfigError::Invalid(_))));

        let nan = MonitorConfig::default()
            .with_thresholds(RiskThresholds::default().with_unstable_average(f64::NAN));
        assert!(HeatMonitor::try_with_time_source(nan, FixedTime::new(0)).is_err());

        assert!(HeatMonitor::try_new(MonitorConfig::default()).is_ok());
    }

    #[test]
    fn forecast_refresh_is_cached() {
        let monitor = monitor();
        assert_eq!(monitor.refresh_forecast(&StaticBaseline(36.8)).unwrap(), Some(36.8));
        assert_eq!(monitor.forecast_baseline().unwrap(), Some(36.8));

        monitor.set_forecast_baseline(Some(f64::NAN)).unwrap();
        assert_eq!(monitor.forecast_baseline().unwrap(), None);
    }

    #[test]
    fn reset_clears_histories() {
        let monitor = monitor();
        monitor.ingest_vitals(&resting()).unwrap();
        monitor.reset().unwrap();

        assert!(monitor.last_assessment().unwrap().is_placeholder());
        assert!(monitor.vitals_history().unwrap().is_empty());
    }
}
