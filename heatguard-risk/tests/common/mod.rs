//! Shared fixtures for the risk integration tests

#![allow(dead_code)]

use heatguard_core::{time::SteppedTime, RawVitals};
use heatguard_risk::{HeatMonitor, MonitorConfig};

/// 2023-11-14T22:13:20Z
pub const START_MS: u64 = 1_700_000_000_000;

/// Resting adult indoors: {V0:30, V1:50, V2:37, V3:98, V4:80}
pub fn resting() -> RawVitals {
    RawVitals::complete([30.0, 50.0, 37.0, 98.0, 80.0])
}

/// Worker in direct sun with elevated core temperature
pub fn heat_stress() -> RawVitals {
    RawVitals::complete([41.0, 70.0, 39.5, 93.0, 150.0])
}

/// Monitor on a 1 Hz simulated clock
pub fn monitor(config: MonitorConfig) -> HeatMonitor {
    HeatMonitor::with_time_source(config, SteppedTime::new(START_MS, 1_000))
}
