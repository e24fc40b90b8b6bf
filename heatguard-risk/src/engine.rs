//! Risk Engine: Trend-Aware Status Classification
//!
//! ## Overview
//!
//! A single hot reading (a sensor touching a warm surface, a heart-rate
//! spike from climbing stairs) must not flag a worker as unstable. The
//! engine therefore classifies on the trailing window of adjusted scores,
//! not on the latest score alone.
//!
//! ## Pipeline
//!
//! ```text
//! VitalsReading ──► instantaneous score ──► + forecast deviation ──► adjusted
//!                                                                       │
//!                        ┌──────────────────────────────────────────────┘
//!                        ▼
//!                 RiskWindow (30) ──► moving average, spike count ──► Status
//! ```
//!
//! ## Classification
//!
//! ```text
//! movingAvg > 80                       → Unstable
//! spikes > 5  or  movingAvg > 60       → Monitor Closely
//! otherwise                            → Stable
//! ```
//!
//! A spike is a window entry strictly above `movingAvg + 10`. Both
//! comparisons are strict: a window mean of exactly 80.0 is Monitor Closely.
//!
//! ## Histories
//!
//! Every classified update produces an [`Assessment`] (kept, last 100) and
//! a [`VitalsSnapshot`] (kept, last 100). Both are append-only and evict
//! their oldest entry when full.

use heatguard_core::{buffer::CircularBuffer, round_to, Timestamp, VitalsReading};

use crate::{
    assessment::{Assessment, Status, VitalsSnapshot},
    config::RiskThresholds,
    constants::{ASSESSMENT_HISTORY_SIZE, SCORE_DECIMALS, VITALS_HISTORY_SIZE},
    scoring::{adjust_for_forecast, score_instantaneous, RiskWindow},
};

/// Status for a window with the given mean and spike count
pub fn classify_status(moving_average: f64, spike_count: usize, thresholds: &RiskThresholds) -> Status {
    if moving_average > thresholds.unstable_average {
        Status::Unstable
    } else if spike_count > thresholds.spike_count || moving_average > thresholds.monitor_average {
        Status::MonitorClosely
    } else {
        Status::Stable
    }
}

/// Scoring window, histories and the last assessment
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    thresholds: RiskThresholds,
    window: RiskWindow,
    assessments: CircularBuffer<Assessment, ASSESSMENT_HISTORY_SIZE>,
    vitals: CircularBuffer<VitalsSnapshot, VITALS_HISTORY_SIZE>,
}

impl RiskEngine {
    /// Engine with an empty window
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Score, adjust and classify one filtered reading
    ///
    /// Records the vitals snapshot and the resulting assessment.
    pub fn assess(&mut self, vitals: VitalsReading, forecast: Option<f64>, timestamp: Timestamp) -> Assessment {
        let instantaneous = score_instantaneous(&vitals);
        let adjusted = adjust_for_forecast(instantaneous, &vitals, forecast);

        log::trace!(
            "Scored update: instantaneous {:.2}, adjusted {:.2}",
            instantaneous,
            adjusted
        );

        self.vitals.push(VitalsSnapshot { timestamp, vitals });
        self.classify(adjusted, vitals, timestamp)
    }

    /// Push an adjusted score into the window and classify the window
    pub fn classify(&mut self, adjusted: f64, vitals: VitalsReading, timestamp: Timestamp) -> Assessment {
        let previous = self.last_status();

        self.window.push(adjusted);
        let moving_average = self.window.moving_average();
        let spikes = self.window.spike_count(self.thresholds.spike_margin);
        let status = classify_status(moving_average, spikes, &self.thresholds);

        if status != previous {
            log::info!(
                "Risk status {} -> {} (window mean {:.2}, {} spikes)",
                previous,
                status,
                moving_average,
                spikes
            );
        }

        let assessment = Assessment {
            score: round_to(adjusted, SCORE_DECIMALS),
            status,
            timestamp,
            vitals,
        };
        self.assessments.push(assessment);
        assessment
    }

    /// Most recent assessment, or the placeholder before the first update
    pub fn last_assessment(&self) -> Assessment {
        self.assessments.last().copied().unwrap_or_else(Assessment::placeholder)
    }

    fn last_status(&self) -> Status {
        self.last_assessment().status
    }

    /// Assessments oldest first
    pub fn assessments(&self) -> impl DoubleEndedIterator<Item = &Assessment> + '_ {
        self.assessments.iter()
    }

    /// Owned copy of the assessment history
    pub fn assessment_history(&self) -> Vec<Assessment> {
        self.assessments.to_vec()
    }

    /// Owned copy of the vitals history
    pub fn vitals_history(&self) -> Vec<VitalsSnapshot> {
        self.vitals.to_vec()
    }

    /// Classification window
    pub fn window(&self) -> &RiskWindow {
        &self.window
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Clear the window and all histories
    pub fn reset(&mut self) {
        *self = Self::new(self.thresholds);
    }
}
