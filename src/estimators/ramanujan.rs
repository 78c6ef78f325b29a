use crate::estimators::Series;
use crate::utils::math::factorial;

/// Ramanujan's series for `1/pi`:
///
/// ```text
/// 1/pi = 2*sqrt(2)/9801 * sum_k (4k)! (1103 + 26390k) / ((k!)^4 396^(4k))
/// ```
///
/// Each term adds roughly eight correct digits, so three terms exhaust
/// double precision. The transform inverts the scaled sum and yields `pi`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RamanujanPi;

impl RamanujanPi {
    const SCALE: f64 = 2.0 * std::f64::consts::SQRT_2 / 9801.0;
}

impl Series for RamanujanPi {
    fn term(&self, k: u64) -> f64 {
        let num = factorial(4 * k) * (1103.0 + 26390.0 * k as f64);
        let den = factorial(k).powi(4) * 396f64.powi(4 * k as i32);
        num / den
    }

    fn transform(&self, sum: f64) -> f64 {
        1.0 / (Self::SCALE * sum)
    }
}
