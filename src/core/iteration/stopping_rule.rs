use crate::core::EstimateError;
use crate::core::error::ensure_positive;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Decides whether two consecutive estimates are close enough to stop.
///
/// Every `Fn(f64, f64) -> bool` is a stopping rule.
pub trait StoppingRule {
    fn should_stop(&self, previous: f64, next: f64) -> bool;
}

impl<F> StoppingRule for F
where
    F: Fn(f64, f64) -> bool,
{
    #[inline]
    fn should_stop(&self, previous: f64, next: f64) -> bool {
        self(previous, next)
    }
}

/// Stops once `|next - previous| < epsilon`. Estimates are never compared
/// for exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AbsoluteTolerance {
    epsilon: f64,
}

impl AbsoluteTolerance {
    pub fn new(epsilon: f64) -> Result<Self, EstimateError> {
        ensure_positive("tolerance", epsilon)?;
        Ok(Self { epsilon })
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for AbsoluteTolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_TOLERANCE,
        }
    }
}

impl StoppingRule for AbsoluteTolerance {
    #[inline]
    fn should_stop(&self, previous: f64, next: f64) -> bool {
        (next - previous).abs() < self.epsilon
    }
}
