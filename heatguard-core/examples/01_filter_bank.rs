//! Filter Bank Example
//!
//! Feeds a noisy minute of wearable data through the five channel filters
//! and prints raw against filtered values.
//!
//! ## What You'll Learn
//!
//! - Building updates from virtual pin keys
//! - How quickly each channel settles with its own tuning
//! - What happens to a channel whose reading is rejected
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_filter_bank
//! ```

use heatguard_core::{Channel, FilterBank, RawVitals};

fn main() {
    println!("HeatGuard Filter Bank Example");
    println!("=============================\n");

    let mut bank = FilterBank::default();

    // Deterministic jitter so the output is reproducible
    let jitter = |step: u32, amplitude: f64| {
        let phase = (step as f64 * 1.7).sin() + (step as f64 * 0.3).cos();
        phase * amplitude / 2.0
    };

    println!("{:>4} {:>16} {:>16}", "step", "heart rate raw", "filtered");
    for step in 0..60 {
        let heart_rate = 95.0 + jitter(step, 12.0);
        let raw: RawVitals = [
            ("V0", 33.0 + jitter(step, 0.2)),
            ("V1", 60.0 + jitter(step, 1.5)),
            ("V2", 37.6 + jitter(step, 0.8)),
            ("V3", 96.0 + jitter(step, 1.0)),
            ("V4", heart_rate),
        ]
        .into_iter()
        .collect();

        match bank.ingest_all(&raw) {
            Ok(update) if step % 10 == 0 => {
                println!("{:>4} {:>16.2} {:>16.3}", step, heart_rate, update.reading.heart_rate());
            }
            Ok(_) => {}
            Err(e) => println!("{:>4} rejected: {}", step, e),
        }
    }

    println!("\nFilter state after 60 updates:");
    for channel in Channel::ALL {
        let filter = bank.filter(channel);
        println!(
            "  {:<30} position {:>8.3}  velocity {:>+8.4}  variance {:.5}",
            channel.label(),
            filter.position(),
            filter.velocity(),
            filter.position_variance(),
        );
    }

    // A detached SpO2 clip reports garbage: the channel holds its last value
    println!("\nSpO2 clip detached:");
    let raw = RawVitals::complete([33.0, 60.0, 37.6, f64::NAN, 95.0]);
    match bank.ingest_all(&raw) {
        Ok(update) => {
            for err in update.rejected.iter() {
                println!("  rejected: {}", err);
            }
            println!("  SpO2 held at {:.3}", update.reading.spo2());
        }
        Err(e) => println!("  update refused: {}", e),
    }
}
