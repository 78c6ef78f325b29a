use crate::core::error::ensure_positive;
use crate::core::{AbsoluteTolerance, EstimateError, Refinement, estimate};

/// Newton's method for `sqrt(a)`: `x -> (x + a / x) / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareRoot {
    radicand: f64,
}

impl SquareRoot {
    pub fn new(radicand: f64) -> Result<Self, EstimateError> {
        ensure_positive("radicand", radicand)?;
        Ok(Self { radicand })
    }

    #[inline]
    pub fn radicand(&self) -> f64 {
        self.radicand
    }

    /// Any positive guess converges; the radicand itself is as good as any.
    #[inline]
    pub fn default_guess(&self) -> f64 {
        self.radicand
    }
}

impl Refinement for SquareRoot {
    #[inline]
    fn refine(&self, x: f64) -> f64 {
        (x + self.radicand / x) / 2.0
    }

    fn check_domain(&self, x: f64) -> Result<(), EstimateError> {
        if x == 0.0 {
            return Err(EstimateError::invalid(
                "initial guess must be nonzero: the refinement divides by the estimate",
            ));
        }
        Ok(())
    }
}

/// Square root of `a` by Newton's method, stopping once two consecutive
/// estimates are within `epsilon` of each other.
pub fn square_root(a: f64, initial_guess: f64, epsilon: f64) -> Result<f64, EstimateError> {
    let refine = SquareRoot::new(a)?;
    let stop = AbsoluteTolerance::new(epsilon)?;
    estimate(initial_guess, refine, stop)
}
