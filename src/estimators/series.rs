use crate::core::error::ensure_positive;
use crate::core::{EstimateError, IterationState};
use tracing::{debug, warn};

pub const DEFAULT_TERM_THRESHOLD: f64 = 1e-15;

/// An infinite series `sum(term(k)) for k = 0, 1, 2, ...`.
///
/// The summed value is passed through [`transform`] before being returned,
/// which lets a series whose sum is `1/pi` report `pi` directly.
pub trait Series {
    fn term(&self, k: u64) -> f64;

    fn transform(&self, sum: f64) -> f64 {
        sum
    }
}

/// Accumulates the terms of a series until the newest one is negligible.
///
/// Unlike [`Iteration`](crate::core::Iteration), the stopping test looks at
/// the magnitude of the term just added, not at the change of the total,
/// and the term index drives the computation.
pub struct SeriesSummation<'a, S: ?Sized> {
    series: &'a S,
    threshold: f64,
    sum: f64,
    state: IterationState,
}

impl<'a, S: Series + ?Sized> SeriesSummation<'a, S> {
    pub fn new(series: &'a S, threshold: f64) -> Result<Self, EstimateError> {
        ensure_positive("term threshold", threshold)?;
        Ok(Self {
            series,
            threshold,
            sum: 0.0,
            state: IterationState::Running {
                iteration: 0,
                current: 0.0,
            },
        })
    }

    pub fn state(&self) -> IterationState {
        self.state
    }

    /// Raw partial sum, before the closed-form transform.
    pub fn partial_sum(&self) -> f64 {
        self.sum
    }

    pub fn step(&mut self) -> Result<IterationState, EstimateError> {
        let IterationState::Running { iteration: k, .. } = self.state else {
            return Ok(self.state);
        };

        let term = self.series.term(k);
        if !term.is_finite() {
            return Err(EstimateError::NonFinite { iteration: k + 1 });
        }
        self.sum += term;
        debug!(k, term, sum = self.sum, "added term");

        self.state = if term.abs() < self.threshold {
            IterationState::Done {
                iterations: k + 1,
                value: self.series.transform(self.sum),
            }
        } else {
            IterationState::Running {
                iteration: k + 1,
                current: self.sum,
            }
        };
        Ok(self.state)
    }
}

/// Sums `series` until a term smaller than `threshold` (in magnitude) has
/// been added, then returns the transformed total.
pub fn sum_series<S: Series + ?Sized>(series: &S, threshold: f64) -> Result<f64, EstimateError> {
    let mut summation = SeriesSummation::new(series, threshold)?;
    loop {
        if let IterationState::Done { value, .. } = summation.step()? {
            return Ok(value);
        }
    }
}

/// Like [`sum_series`], but gives up after `max_terms` terms.
pub fn sum_series_bounded<S: Series + ?Sized>(
    series: &S,
    threshold: f64,
    max_terms: u64,
) -> Result<f64, EstimateError> {
    if max_terms == 0 {
        return Err(EstimateError::invalid("max_terms must be > 0"));
    }

    let mut summation = SeriesSummation::new(series, threshold)?;
    while summation.state().iterations() < max_terms {
        if let IterationState::Done { value, .. } = summation.step()? {
            return Ok(value);
        }
    }

    warn!(max_terms, partial_sum = summation.partial_sum(), "term limit reached");
    Err(EstimateError::IterationLimit {
        iterations: max_terms,
        last: summation.partial_sum(),
    })
}
