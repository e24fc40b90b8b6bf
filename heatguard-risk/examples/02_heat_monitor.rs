//! Heat Monitor Example
//!
//! Simulates a worker moving from a shaded rest area into direct sun and
//! shows how the risk status follows the trailing window rather than each
//! individual reading.
//!
//! ## What You'll Learn
//!
//! - Loading a monitor configuration from JSON
//! - Feeding a forecast baseline from a batch of model predictions
//! - Reading assessments, histories and reports
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_heat_monitor
//! ```

use heatguard_core::RawVitals;
use heatguard_risk::{ForecastBatch, HeatMonitor, MonitorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("HeatGuard Monitor Example");
    println!("=========================\n");

    let config = MonitorConfig::from_json(r#"{ "filters": { "missing": "CarryForward" } }"#)?;
    let monitor = HeatMonitor::new(config);

    // 24 hourly body temperature predictions from the forecasting model
    let batch: ForecastBatch = (0..24)
        .map(|hour| 36.7 + 0.3 * ((hour as f64 - 14.0) / 24.0 * std::f64::consts::TAU).cos())
        .collect();
    let stats = batch.distribution()?;
    println!(
        "Forecast: mean {:.2}°C, median {:.2}°C, std {:.3}, range [{:.2}, {:.2}]",
        stats.mean, stats.median, stats.std_dev, stats.min, stats.max
    );
    monitor.refresh_forecast(&batch)?;

    println!("\n{:>4} {:>8} {:>8}  status", "step", "body °C", "risk");
    for step in 0..90 {
        // Shade for the first 30 updates, then direct sun with rising core temperature
        let exposure = if step < 30 { 0.0 } else { (step - 30) as f64 / 60.0 };
        let raw = RawVitals::complete([
            28.0 + 14.0 * exposure,
            55.0 + 15.0 * exposure,
            36.9 + 2.8 * exposure,
            98.0 - 5.0 * exposure,
            78.0 + 80.0 * exposure,
        ]);

        let report = monitor.ingest_vitals(&raw)?;
        if step % 10 == 0 || !report.is_clean() {
            let a = report.assessment;
            println!("{:>4} {:>8.2} {:>8.2}  {}", step, a.vitals.body_temp(), a.score, a.status);
        }
    }

    let trend = monitor.trend_report()?;
    let volatility = monitor.volatility_report()?;
    println!(
        "\nLast rolling mean {:.2} (window {}), last volatility {:.2}",
        trend.rolling_mean.last().copied().unwrap_or_default(),
        trend.window,
        volatility.volatility.last().copied().unwrap_or_default(),
    );

    println!("\nLatest assessment as JSON:");
    println!("{}", serde_json::to_string_pretty(&monitor.last_assessment()?)?);

    Ok(())
}
