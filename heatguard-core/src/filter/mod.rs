//! Per-Channel Kalman Filtering
//!
//! ## Overview
//!
//! Wearable sensors are noisy in channel-specific ways: PPG heart rate jumps
//! by 20 bpm when the wrist moves, skin temperature jitters with airflow,
//! SpO2 drops for a sample when contact is poor. Each of the five channels
//! runs its own independent Kalman filter to smooth those artefacts before
//! anything downstream sees the value.
//!
//! ## Model
//!
//! Every channel uses the same constant-velocity model with a unit time
//! step; only the noise tuning differs.
//!
//! ```text
//! State:        x = [position, velocity]ᵀ
//! Transition:   F = [[1, 1],
//!                    [0, 1]]
//! Observation:  H = [1, 0]
//! Process:      Q = q·I      (per channel)
//! Measurement:  R            (per channel)
//! ```
//!
//! ### Prediction Step
//! ```text
//! x̂ = F·x
//! P = F·P·Fᵀ + Q
//! ```
//!
//! ### Update Step
//! ```text
//! y = z - H·x̂              innovation
//! S = H·P·Hᵀ + R           innovation covariance (scalar)
//! K = P·Hᵀ / S             gain
//! x = x̂ + K·y
//! P = (I-K·H)·P·(I-K·H)ᵀ + K·R·Kᵀ      Joseph form
//! ```
//!
//! The Joseph form equals `(I-K·H)·P` under exact arithmetic and keeps the
//! covariance symmetric positive semi-definite under rounding.
//!
//! ## Initial Conditions
//!
//! Filters start at `x = [0, 0]` with `P = 10⁶·I`. The first gain is within a
//! few parts per million of 1, so the first estimate lands just short of the
//! first measurement and the uncertainty collapses to roughly `R`.
//!
//! ## Architecture
//!
//! 1. **Matrix operations**: fixed-size, allocation-free linear algebra
//! 2. **[`ConstantVelocityFilter`]**: one channel's state and covariance
//! 3. **[`FilterBank`]**: five filters, their validators and histories
//!
//! ## Usage Example
//!
//! ```rust
//! use heatguard_core::RawVitals;
//! use heatguard_core::filter::{FilterBank, FilterBankConfig};
//!
//! let mut bank = FilterBank::new(FilterBankConfig::default());
//!
//! let update = bank.ingest_all(&RawVitals::complete([30.0, 50.0, 37.0, 98.0, 80.0]))?;
//! assert!(update.rejected.is_empty());
//! assert!((update.reading.body_temp() - 37.0).abs() < 1e-3);
//! # Ok::<(), heatguard_core::ReadingError>(())
//! ```

pub mod bank;
pub mod kalman;

pub use bank::{
    BankUpdate, ChannelHistory, FilterBank, FilterBankConfig,
    InvalidReadingPolicy, MissingChannelPolicy,
};
pub use kalman::{ChannelTuning, ConstantVelocityFilter};

/// Fixed-size linear algebra for the filters
///
/// All operations work on arrays sized by const generics, so nothing is
/// allocated and dimension mismatches fail to compile.
pub mod matrix {
    /// Matrix type using const generics
    pub type Matrix<const R: usize, const C: usize> = [[f64; C]; R];

    /// Square matrix type
    pub type SquareMatrix<const N: usize> = Matrix<N, N>;

    /// Vector type
    pub type Vector<const N: usize> = [f64; N];

    /// Identity matrix
    pub fn identity<const N: usize>() -> SquareMatrix<N> {
        let mut m = [[0.0; N]; N];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        m
    }

    /// Matrix multiplication: A[R×K] × B[K×C] = [R×C]
    pub fn multiply<const R: usize, const K: usize, const C: usize>(
        a: &Matrix<R, K>,
        b: &Matrix<K, C>,
    ) -> Matrix<R, C> {
        let mut out = [[0.0; C]; R];
        for i in 0..R {
            for j in 0..C {
                out[i][j] = (0..K).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        out
    }

    /// Matrix transpose
    pub fn transpose<const R: usize, const C: usize>(a: &Matrix<R, C>) -> Matrix<C, R> {
        let mut out = [[0.0; R]; C];
        for i in 0..R {
            for j in 0..C {
                out[j][i] = a[i][j];
            }
        }
        out
    }

    /// Element-wise sum
    pub fn add<const R: usize, const C: usize>(
        a: &Matrix<R, C>,
        b: &Matrix<R, C>,
    ) -> Matrix<R, C> {
        let mut out = *a;
        for i in 0..R {
            for j in 0..C {
                out[i][j] += b[i][j];
            }
        }
        out
    }

    /// Element-wise difference
    pub fn sub<const R: usize, const C: usize>(
        a: &Matrix<R, C>,
        b: &Matrix<R, C>,
    ) -> Matrix<R, C> {
        let mut out = *a;
        for i in 0..R {
            for j in 0..C {
                out[i][j] -= b[i][j];
            }
        }
        out
    }

    /// Multiply every element by a scalar
    pub fn scale<const R: usize, const C: usize>(a: &Matrix<R, C>, k: f64) -> Matrix<R, C> {
        let mut out = *a;
        for row in out.iter_mut() {
            for v in row.iter_mut() {
                *v *= k;
            }
        }
        out
    }

    /// Matrix-vector multiplication: y = A × x
    pub fn matvec<const R: usize, const C: usize>(
        matrix: &Matrix<R, C>,
        vector: &Vector<C>,
    ) -> Vector<R> {
        let mut out = [0.0; R];
        for (i, row) in matrix.iter().enumerate() {
            out[i] = row.iter().zip(vector.iter()).map(|(m, v)| m * v).sum();
        }
        out
    }

    /// Determinant of a 2×2 matrix
    pub fn determinant2(m: &SquareMatrix<2>) -> f64 {
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }
}

#[cfg(test)]
mod tests {
    use super::matrix::*;

    #[test]
    fn matrix_operations() {
        let a: Matrix<2, 3> = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b: Matrix<3, 2> = [[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]];

        let c = multiply(&a, &b);

        assert_eq!(c[0][0], 58.0); // 1×7 + 2×9 + 3×11
        assert_eq!(c[0][1], 64.0); // 1×8 + 2×10 + 3×12

        let at = transpose(&a);
        assert_eq!(at[2][1], 6.0);
    }

    #[test]
    fn constant_velocity_propagation() {
        let f: SquareMatrix<2> = [[1.0, 1.0], [0.0, 1.0]];
        let x = matvec(&f, &[10.0, 2.0]);
        assert_eq!(x, [12.0, 2.0]);

        // F·I·Fᵀ = [[2, 1], [1, 1]]
        let p = multiply(&multiply(&f, &identity::<2>()), &transpose(&f));
        assert_eq!(p, [[2.0, 1.0], [1.0, 1.0]]);
        assert_eq!(determinant2(&p), 1.0);
    }

    #[test]
    fn add_sub_scale() {
        let a: SquareMatrix<2> = [[1.0, 2.0], [3.0, 4.0]];
        let i = identity::<2>();
        assert_eq!(add(&a, &i), [[2.0, 2.0], [3.0, 5.0]]);
        assert_eq!(sub(&a, &i), [[0.0, 2.0], [3.0, 3.0]]);
        assert_eq!(scale(&a, 0.5), [[0.5, 1.0], [1.5, 2.0]]);
    }
}
