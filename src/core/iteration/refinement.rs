use crate::core::EstimateError;

/// Maps the current estimate to the next, hopefully better, one.
///
/// [`check_domain`] is consulted once on the initial guess, before any
/// refinement takes place. Implementations that divide by the estimate
/// (e.g. Newton's square root) reject zero there.
///
/// Every `Fn(f64) -> f64` is a refinement without domain restrictions.
pub trait Refinement {
    /// Computes the next estimate from the current one.
    fn refine(&self, x: f64) -> f64;

    /// Validates that `x` is a legal starting point.
    fn check_domain(&self, _x: f64) -> Result<(), EstimateError> {
        Ok(())
    }
}

impl<F> Refinement for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn refine(&self, x: f64) -> f64 {
        self(x)
    }
}
