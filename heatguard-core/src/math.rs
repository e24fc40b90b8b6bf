//! Small numeric helpers shared by the filter bank and the risk engine

/// Round half away from zero to `decimals` places
///
/// Uses `libm` so the result is identical with and without `std`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = libm::pow(10.0, f64::from(decimals));
    libm::round(value * factor) / factor
}
