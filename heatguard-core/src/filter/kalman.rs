//! Constant-velocity Kalman filter for one channel
//!
//! Scalar measurement, two-component state. See the [module docs](super)
//! for the equations.

use crate::{
    channel::Channel,
    constants::filter::*,
    filter::matrix::{
        add, identity, matvec, multiply, scale, sub, transpose, Matrix, SquareMatrix, Vector,
    },
};

/// State transition: position advances by velocity each step
const TRANSITION: SquareMatrix<2> = [[1.0, 1.0], [0.0, 1.0]];

/// Only position is observed
const OBSERVATION: Matrix<1, 2> = [[1.0, 0.0]];

/// Noise tuning for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelTuning {
    /// Diagonal entry of the process noise covariance Q
    pub process_noise: f64,
    /// Measurement noise variance R
    pub measurement_noise: f64,
    /// Diagonal entry of the initial covariance P₀
    pub initial_covariance: f64,
}

impl ChannelTuning {
    /// Design tuning for `channel`
    pub const fn for_channel(channel: Channel) -> Self {
        let (process_noise, measurement_noise) = match channel {
            Channel::AtmosphericTemp => (ATM_TEMP_PROCESS_NOISE, ATM_TEMP_MEASUREMENT_NOISE),
            Channel::Humidity => (HUMIDITY_PROCESS_NOISE, HUMIDITY_MEASUREMENT_NOISE),
            Channel::BodyTemp => (BODY_TEMP_PROCESS_NOISE, BODY_TEMP_MEASUREMENT_NOISE),
            Channel::SpO2 => (SPO2_PROCESS_NOISE, SPO2_MEASUREMENT_NOISE),
            Channel::HeartRate => (HEART_RATE_PROCESS_NOISE, HEART_RATE_MEASUREMENT_NOISE),
        };

        Self {
            process_noise,
            measurement_noise,
            initial_covariance: INITIAL_COVARIANCE,
        }
    }

    /// Set process noise (higher = track changes faster, noisier output)
    pub fn with_process_noise(mut self, q: f64) -> Self {
        self.process_noise = q.abs();
        self
    }

    /// Set measurement noise (higher = trust the prediction more)
    pub fn with_measurement_noise(mut self, r: f64) -> Self {
        self.measurement_noise = r.abs();
        self
    }

    /// Set the initial uncertainty
    pub fn with_initial_covariance(mut self, p0: f64) -> Self {
        self.initial_covariance = p0.abs();
        self
    }

    fn process_noise_matrix(&self) -> SquareMatrix<2> {
        scale(&identity::<2>(), self.process_noise)
    }

    fn initial_covariance_matrix(&self) -> SquareMatrix<2> {
        scale(&identity::<2>(), self.initial_covariance)
    }
}

/// Filter state for one channel
///
/// Owned by the [`FilterBank`](super::FilterBank); mutated only by its own
/// [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct ConstantVelocityFilter {
    /// [position, velocity]
    state: Vector<2>,
    /// Estimation error covariance
    covariance: SquareMatrix<2>,
    tuning: ChannelTuning,
    /// Measurements absorbed since construction or reset
    update_count: u32,
}

impl ConstantVelocityFilter {
    /// Filter at rest with the tuning's initial uncertainty
    pub fn new(tuning: ChannelTuning) -> Self {
        Self {
            state: [0.0, 0.0],
            covariance: tuning.initial_covariance_matrix(),
            tuning,
            update_count: 0,
        }
    }

    /// Predict one step ahead and correct with `measurement`
    ///
    /// Returns the unrounded position estimate. The caller is responsible
    /// for rejecting non-finite measurements first.
    pub fn step(&mut self, measurement: f64) -> f64 {
        self.predict();
        self.correct(measurement);
        self.update_count = self.update_count.saturating_add(1);
        self.state[0]
    }

    fn predict(&mut self) {
        // x̂ = F·x
        self.state = matvec(&TRANSITION, &self.state);

        // P = F·P·Fᵀ + Q
        let fp = multiply(&TRANSITION, &self.covariance);
        let fpft = multiply(&fp, &transpose(&TRANSITION));
        self.covariance = add(&fpft, &self.tuning.process_noise_matrix());
    }

    fn correct(&mut self, measurement: f64) {
        let r = self.tuning.measurement_noise;

        // y = z - H·x̂
        let innovation = measurement - matvec(&OBSERVATION, &self.state)[0];

        // S = H·P·Hᵀ + R
        let ht = transpose(&OBSERVATION);
        let pht = multiply(&self.covariance, &ht);
        let s = multiply(&OBSERVATION, &pht)[0][0] + r;
        if s <= 0.0 {
            // Zero prior uncertainty and zero measurement noise: nothing to weigh
            return;
        }

        // K = P·Hᵀ·S⁻¹
        let gain: Matrix<2, 1> = scale(&pht, 1.0 / s);

        // x = x̂ + K·y
        self.state[0] += gain[0][0] * innovation;
        self.state[1] += gain[1][0] * innovation;

        self.joseph_update(&gain, r);
    }

    /// P = (I - K·H)·P·(I - K·H)ᵀ + K·R·Kᵀ
    fn joseph_update(&mut self, gain: &Matrix<2, 1>, r: f64) {
        let i_kh = sub(&identity::<2>(), &multiply(gain, &OBSERVATION));

        let left = multiply(&i_kh, &self.covariance);
        let propagated = multiply(&left, &transpose(&i_kh));

        let krkt = scale(&multiply(gain, &transpose(gain)), r);
        self.covariance = add(&propagated, &krkt);
    }

    /// Current position estimate
    pub fn position(&self) -> f64 {
        self.state[0]
    }

    /// Current velocity estimate (position change per update)
    pub fn velocity(&self) -> f64 {
        self.state[1]
    }

    /// Full state vector
    pub fn state(&self) -> &Vector<2> {
        &self.state
    }

    /// Estimation error covariance
    pub fn covariance(&self) -> &SquareMatrix<2> {
        &self.covariance
    }

    /// Variance of the position estimate
    pub fn position_variance(&self) -> f64 {
        self.covariance[0][0]
    }

    /// Tuning in use
    pub fn tuning(&self) -> &ChannelTuning {
        &self.tuning
    }

    /// Number of measurements absorbed
    pub fn update_count(&self) -> u32 {
        self.update_count
    }

    /// Return to the initial state and uncertainty
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::matrix::determinant2;
    use alloc::vec::Vec;

    #[test]
    fn first_update_lands_just_short_of_measurement() {
        for channel in Channel::ALL {
            let mut filter = ConstantVelocityFilter::new(ChannelTuning::for_channel(channel));
            let estimate = filter.step(37.0);

            assert!(estimate > 0.0 && estimate < 37.0, "{channel}: {estimate}");
            assert!((estimate - 37.0).abs() < 1e-3);
        }
    }

    #[test]
    fn constant_input_overshoots_once_then_settles() {
        // The first correction leaves velocity at about half the innovation,
        // so step 2 carries the largest error of the run.
        for channel in Channel::ALL {
            let mut filter = ConstantVelocityFilter::new(ChannelTuning::for_channel(channel));
            let errors: Vec<f64> = (0..200).map(|_| (filter.step(37.0) - 37.0).abs()).collect();

            assert!(errors[1] > 1.5 * errors[0], "{channel}: {errors:?}");
            assert!(errors[2..].iter().all(|e| *e <= errors[1]), "{channel}");
            assert!(errors[49] < errors[0], "{channel}");
        }
    }

    #[test]
    fn first_update_collapses_uncertainty_to_about_r() {
        let tuning = ChannelTuning::for_channel(Channel::HeartRate);
        let mut filter = ConstantVelocityFilter::new(tuning);
        filter.step(80.0);

        assert!((filter.position_variance() - tuning.measurement_noise).abs() < 1e-3);
    }

    #[test]
    fn position_variance_strictly_decreases() {
        for channel in Channel::ALL {
            let mut filter = ConstantVelocityFilter::new(ChannelTuning::for_channel(channel));
            let mut previous = filter.position_variance();

            for _ in 0..50 {
                filter.step(25.0);
                let current = filter.position_variance();
                assert!(current < previous, "{channel}: {current} !< {previous}");
                previous = current;
            }
        }
    }

    #[test]
    fn covariance_stays_symmetric_psd() {
        let mut filter = ConstantVelocityFilter::new(ChannelTuning::for_channel(Channel::SpO2));
        let readings = [97.0, 96.5, 98.0, 92.0, 99.0, 97.5, 88.0, 97.0];

        for _ in 0..20 {
            for z in readings {
                filter.step(z);
                let p = filter.covariance();
                assert!((p[0][1] - p[1][0]).abs() < 1e-9);
                assert!(p[0][0] >= 0.0 && p[1][1] >= 0.0);
                assert!(determinant2(p) >= 0.0);
            }
        }
    }

    #[test]
    fn tracks_linear_ramp() {
        let tuning = ChannelTuning::for_channel(Channel::AtmosphericTemp);
        let mut filter = ConstantVelocityFilter::new(tuning);

        for i in 0..100 {
            filter.step(20.0 + 0.1 * i as f64);
        }

        assert!((filter.position() - 29.9).abs() < 0.05);
        assert!((filter.velocity() - 0.1).abs() < 0.01);
    }

    #[test]
    fn reset_restores_prior() {
        let mut filter = ConstantVelocityFilter::new(ChannelTuning::for_channel(Channel::BodyTemp));
        filter.step(37.0);
        filter.reset();

        assert_eq!(filter.state(), &[0.0, 0.0]);
        assert_eq!(filter.position_variance(), INITIAL_COVARIANCE);
        assert_eq!(filter.update_count(), 0);
    }
}
