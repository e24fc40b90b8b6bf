//! Shared fixtures for the filter bank integration tests
//!
//! - Typical resting and heat-stress updates
//! - A deterministic jitter source so noisy series are reproducible

#![allow(dead_code)]

use heatguard_core::{Channel, RawVitals};

/// Resting adult indoors: {V0:30, V1:50, V2:37, V3:98, V4:80}
pub fn resting() -> RawVitals {
    RawVitals::complete([30.0, 50.0, 37.0, 98.0, 80.0])
}

/// Worker in direct sun with elevated core temperature
pub fn heat_stress() -> RawVitals {
    RawVitals::complete([41.0, 70.0, 39.5, 93.0, 150.0])
}

/// Small linear congruential generator for reproducible noise
pub struct TestRng {
    state: u64,
}

impl TestRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [-amplitude, amplitude)
    pub fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amplitude
    }
}

/// `base` with every channel perturbed by up to `amplitude`
pub fn noisy(base: &RawVitals, rng: &mut TestRng, amplitude: f64) -> RawVitals {
    let mut raw = RawVitals::new();
    for channel in Channel::ALL {
        if let Some(value) = base.get(channel) {
            raw.set(channel, value + rng.jitter(amplitude));
        }
    }
    raw
}
