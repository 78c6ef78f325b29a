use crate::core::EstimateError;
use crate::core::error::ensure_finite;
use crate::estimators::Series;
use crate::utils::math::ln_factorial;

/// Taylor series of `e^x`.
///
/// Terms are `|x|^k / k!`, evaluated in log space so that large `k` neither
/// overflows `|x|^k` nor `k!`. For negative `x` the sum is `e^|x|` and
/// [`transform`](Series::transform) returns its reciprocal; the alternating
/// series for `e^x` itself cancels away every significant digit past
/// `x = -15` or so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialSeries {
    x: f64,
}

impl ExponentialSeries {
    pub fn new(x: f64) -> Result<Self, EstimateError> {
        ensure_finite("exponent", x)?;
        Ok(Self { x })
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }
}

impl Series for ExponentialSeries {
    fn term(&self, k: u64) -> f64 {
        if k == 0 {
            return 1.0;
        }
        if self.x == 0.0 {
            return 0.0;
        }
        (k as f64 * self.x.abs().ln() - ln_factorial(k)).exp()
    }

    fn transform(&self, sum: f64) -> f64 {
        if self.x < 0.0 { 1.0 / sum } else { sum }
    }
}

impl ExponentialSeries {
    /// Number of terms [`sum_series`](crate::estimators::sum_series) adds
    /// before a term falls below `threshold`, or `None` if that takes more
    /// than `limit` terms.
    pub fn terms_needed(&self, threshold: f64, limit: u64) -> Option<u64> {
        (0..limit)
            .find(|&k| self.term(k).abs() < threshold)
            .map(|k| k + 1)
    }
}
