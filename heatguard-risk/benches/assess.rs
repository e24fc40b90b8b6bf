use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heatguard_core::{FixedTime, RawVitals, VitalsReading};
use heatguard_risk::{score_instantaneous, HeatMonitor, MonitorConfig, RiskEngine};

fn bench_scoring(c: &mut Criterion) {
    let reading = VitalsReading::from_array([30.0, 50.0, 37.0, 98.0, 80.0]);

    c.bench_function("score_instantaneous", |b| {
        b.iter(|| score_instantaneous(black_box(&reading)))
    });

    c.bench_function("engine assess full window", |b| {
        let mut engine = RiskEngine::default();
        b.iter(|| engine.assess(black_box(reading), Some(36.9), 0))
    });
}

fn bench_monitor(c: &mut Criterion) {
    let raw = RawVitals::complete([30.0, 50.0, 37.0, 98.0, 80.0]);

    c.bench_function("monitor ingest_vitals", |b| {
        let monitor = HeatMonitor::with_time_source(MonitorConfig::default(), FixedTime::new(0));
        b.iter(|| monitor.ingest_vitals(black_box(&raw)))
    });
}

criterion_group!(benches, bench_scoring, bench_monitor);
criterion_main!(benches);
