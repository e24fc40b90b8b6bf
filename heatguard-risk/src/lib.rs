//! Heatstroke Risk Scoring and Classification
//!
//! ## Overview
//!
//! This crate sits on top of the `heatguard-core` filter bank. Each filtered
//! reading becomes a composite risk score, the score is corrected by the
//! deviation from a forecast body temperature, and a trailing window of
//! corrected scores decides the wearer's status.
//!
//! ## Why a window?
//!
//! Heat illness develops over minutes, not samples. Classifying on the
//! trailing mean of 30 scores means:
//!
//! 1. **No flicker**: one bad sample cannot flip the status
//! 2. **Early warning on bursts**: a run of spikes raises the status even
//!    while the mean is still low
//! 3. **Explainable**: the mean and spike count are logged on every status
//!    change
//!
//! ## Risk Score
//!
//! ```text
//! score = bodyTemp/42×40 + heartRate/200×25 + humidity/100×20
//!       + solar/1000×10 - spo2/100×15                 clamp [0, 100]
//!
//! adjusted = score + |bodyTemp - forecast| / forecast × 100   clamp [0, 100]
//! ```
//!
//! See [`constants`] for every weight and threshold.
//!
//! ## Architecture
//!
//! ```text
//! RawVitals ─► HeatMonitor ─┬─► FilterBank (core) ─► VitalsReading
//!                            │                              │
//!                            └─► RiskEngine ◄────────────────┘
//!                                   │
//!                                   ├─► Assessment history (100)
//!                                   └─► Vitals history (100) ─► reports
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use heatguard_core::RawVitals;
//! use heatguard_risk::{ForecastBatch, HeatMonitor, MonitorConfig, Status};
//!
//! let monitor = HeatMonitor::new(MonitorConfig::default());
//! monitor.refresh_forecast(&ForecastBatch::new([36.9, 37.0, 37.1]))?;
//!
//! let raw: RawVitals = serde_json::from_str(
//!     r#"{"V0": 30, "V1": 50, "V2": 37, "V3": 98, "V4": 80}"#,
//! ).unwrap();
//!
//! let report = monitor.ingest_vitals(&raw)?;
//! assert_eq!(report.assessment.status, Status::Stable);
//! # Ok::<(), heatguard_risk::MonitorError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod assessment;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod forecast;
pub mod monitor;
pub mod report;
pub mod scoring;

// Public API
pub use assessment::{Assessment, Status, VitalsSnapshot};
pub use config::{MonitorConfig, RiskThresholds};
pub use engine::{classify_status, RiskEngine};
pub use errors::{ConfigError, MonitorError, MonitorResult, ReportError, ReportResult};
pub use forecast::{ForecastBatch, ForecastDistribution, ForecastProvider, StaticBaseline};
pub use monitor::{HeatMonitor, IngestReport};
pub use report::{RiskSeries, TrendReport, VitalsSeries, VolatilityReport};
pub use scoring::{adjust_for_forecast, score_instantaneous, RiskWindow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
