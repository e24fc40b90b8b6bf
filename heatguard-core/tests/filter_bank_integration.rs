//! Integration tests for the filter bank
//!
//! Covers:
//! - Convergence of every channel on constant input
//! - Noise suppression relative to the raw stream
//! - Rejection handling under both invalid-reading policies
//! - History bounds under arbitrary update sequences

mod common;

use heatguard_core::{
    constants::SAMPLE_HISTORY_SIZE, Channel, FilterBank, FilterBankConfig,
    InvalidReadingPolicy, MissingChannelPolicy, RawVitals, ReadingError,
};

use common::{heat_stress, noisy, resting, TestRng};

use proptest::prelude::*;

#[test]
fn resting_update_is_reported_verbatim() {
    let mut bank = FilterBank::default();
    let update = bank.ingest_all(&resting()).unwrap();

    assert_eq!(update.reading.as_array(), &[30.0, 50.0, 37.0, 98.0, 80.0]);
    for channel in Channel::ALL {
        let raw = resting().get(channel).unwrap();
        let position = bank.filter(channel).position();
        assert!(position > 0.0 && position < raw, "{channel}: {position}");
    }
}

#[test]
fn constant_input_converges() {
    let mut bank = FilterBank::default();
    for _ in 0..50 {
        bank.ingest_all(&heat_stress()).unwrap();
    }

    for channel in Channel::ALL {
        let target = heat_stress().get(channel).unwrap();
        let estimate = bank.filter(channel).position();
        assert!((estimate - target).abs() < 1e-4, "{channel}: {estimate}");
        assert!(bank.filter(channel).velocity().abs() < 1e-5);
    }
}

#[test]
fn constant_input_reported_exactly_from_first_update() {
    for vitals in [resting(), heat_stress(), RawVitals::complete([70.0, 100.0, 50.0, 100.0, 300.0])] {
        let mut bank = FilterBank::default();
        let expected = Channel::ALL.map(|channel| vitals.get(channel).unwrap());

        for step in 0..200 {
            let update = bank.ingest_all(&vitals).unwrap();
            assert_eq!(update.reading.as_array(), &expected, "step {step}");
        }
    }
}

#[test]
fn noise_is_suppressed() {
    let mut bank = FilterBank::default();
    let mut rng = TestRng::new(7);

    for _ in 0..200 {
        bank.ingest_all(&noisy(&resting(), &mut rng, 2.0)).unwrap();
    }

    let history = bank.history();
    let spread = |values: &[f64]| {
        let tail = &values[values.len() - 50..];
        let mean = tail.iter().sum::<f64>() / tail.len() as f64;
        tail.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / tail.len() as f64
    };

    for channel in Channel::ALL {
        let raw = spread(history.raw(channel));
        let filtered = spread(history.filtered(channel));
        assert!(filtered < raw, "{channel}: {filtered} !< {raw}");
    }
}

#[test]
fn hold_last_reports_previous_value() {
    let mut bank = FilterBank::default();
    let first = bank.ingest_all(&resting()).unwrap();

    let detached = resting().with(Channel::BodyTemp, -127.0);
    let second = bank.ingest_all(&detached).unwrap();

    assert_eq!(second.reading.body_temp(), first.reading.body_temp());
    assert!(matches!(
        second.rejected.as_slice(),
        [ReadingError::OutOfRange { channel: Channel::BodyTemp, value, .. }] if *value == -127.0
    ));
}

#[test]
fn hold_last_before_any_data_reports_zero() {
    let mut bank = FilterBank::default();
    let update = bank
        .ingest_all(&resting().with(Channel::SpO2, f64::INFINITY))
        .unwrap();

    assert_eq!(update.reading.spo2(), 0.0);
    assert_eq!(bank.filter(Channel::SpO2).update_count(), 0);
}

#[test]
fn fail_update_is_atomic() {
    let mut bank = FilterBank::new(
        FilterBankConfig::default().with_invalid_policy(InvalidReadingPolicy::FailUpdate),
    );
    bank.ingest_all(&resting()).unwrap();
    let before = bank.history();

    let result = bank.ingest_all(&resting().with(Channel::Humidity, f64::NAN));

    assert_eq!(result.unwrap_err(), ReadingError::InvalidValue { channel: Channel::Humidity });
    assert_eq!(bank.history(), before);
}

#[test]
fn carry_forward_merges_partial_updates() {
    let mut merged = FilterBank::new(
        FilterBankConfig::default().with_missing_policy(MissingChannelPolicy::CarryForward),
    );
    let mut complete = FilterBank::default();

    let updates = [
        resting(),
        RawVitals::new().with(Channel::BodyTemp, 38.1),
        RawVitals::new().with(Channel::HeartRate, 120.0).with(Channel::Humidity, 65.0),
    ];
    let mut latest = [0.0; 5];
    for update in &updates {
        for channel in Channel::ALL {
            if let Some(value) = update.get(channel) {
                latest[channel.index()] = value;
            }
        }
        let a = merged.ingest_all(update).unwrap();
        let b = complete.ingest_all(&RawVitals::complete(latest)).unwrap();
        assert_eq!(a.reading, b.reading);
    }

    assert_eq!(merged.history(), complete.history());
}

#[test]
fn empty_update_is_all_zero_filled() {
    let mut bank = FilterBank::default();
    let update = bank.ingest_all(&RawVitals::new()).unwrap();

    assert_eq!(update.reading.as_array(), &[0.0; 5]);
    for channel in Channel::ALL {
        assert_eq!(bank.raw_history(channel).collect::<Vec<_>>(), [0.0]);
    }
}

proptest! {
    #[test]
    fn histories_stay_bounded_and_fifo(
        values in prop::collection::vec(-10.0f64..120.0, 1..300)
    ) {
        let mut bank = FilterBank::default();
        for value in &values {
            let _ = bank.ingest(Channel::Humidity, *value);
        }

        let history = bank.history();
        let raw = history.raw(Channel::Humidity);
        prop_assert!(raw.len() <= SAMPLE_HISTORY_SIZE);
        prop_assert_eq!(raw.len(), history.filtered(Channel::Humidity).len());

        // Accepted values in arrival order, newest SAMPLE_HISTORY_SIZE kept
        let accepted: Vec<f64> = values.iter().copied().filter(|v| (0.0..=100.0).contains(v)).collect();
        let expected = &accepted[accepted.len().saturating_sub(SAMPLE_HISTORY_SIZE)..];
        prop_assert_eq!(raw, expected);
    }

    #[test]
    fn covariance_stays_psd(values in prop::collection::vec(20.0f64..45.0, 1..150)) {
        let mut bank = FilterBank::default();
        for value in values {
            bank.ingest(Channel::BodyTemp, value).unwrap();
            let p = bank.filter(Channel::BodyTemp).covariance();
            prop_assert!((p[0][1] - p[1][0]).abs() < 1e-9);
            prop_assert!(p[0][0] >= 0.0 && p[1][1] >= 0.0);
            prop_assert!(p[0][0] * p[1][1] - p[0][1] * p[1][0] >= 0.0);
        }
    }
}
