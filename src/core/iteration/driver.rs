use crate::core::EstimateError;
use crate::core::error::ensure_finite;
use crate::core::iteration::{IterationState, Refinement, Step, StoppingRule, Trace};
use tracing::{debug, warn};

/// Drives a refinement from an initial guess until the stopping rule holds.
///
/// Each call to [`step`] computes one candidate from the current estimate and
/// tests it against the previous one. All state lives in the value itself,
/// so independent runs never interfere.
pub struct Iteration<R, S> {
    refine: R,
    stop: S,
    state: IterationState,
}

impl<R: Refinement, S: StoppingRule> Iteration<R, S> {
    /// Validates the initial guess; no refinement is applied yet.
    pub fn new(initial_guess: f64, refine: R, stop: S) -> Result<Self, EstimateError> {
        ensure_finite("initial guess", initial_guess)?;
        refine.check_domain(initial_guess)?;

        Ok(Self {
            refine,
            stop,
            state: IterationState::Running {
                iteration: 0,
                current: initial_guess,
            },
        })
    }

    pub fn state(&self) -> IterationState {
        self.state
    }

    /// Applies one refinement. Once done, the state is returned unchanged.
    pub fn step(&mut self) -> Result<IterationState, EstimateError> {
        let IterationState::Running { iteration, current } = self.state else {
            return Ok(self.state);
        };

        let next = self.refine.refine(current);
        let iteration = iteration + 1;
        if !next.is_finite() {
            return Err(EstimateError::NonFinite { iteration });
        }

        debug!(iteration, estimate = next, change = (next - current).abs(), "refined");

        self.state = if self.stop.should_stop(current, next) {
            IterationState::Done {
                iterations: iteration,
                value: next,
            }
        } else {
            IterationState::Running {
                iteration,
                current: next,
            }
        };
        Ok(self.state)
    }
}

/// Refines `initial_guess` until `should_stop(current, next)` holds and
/// returns `next`.
///
/// This does not terminate when the refinement never settles within the
/// stopping rule; use [`estimate_bounded`] when that is a possibility.
pub fn estimate<R, S>(initial_guess: f64, refine: R, should_stop: S) -> Result<f64, EstimateError>
where
    R: Refinement,
    S: StoppingRule,
{
    let mut it = Iteration::new(initial_guess, refine, should_stop)?;
    loop {
        if let IterationState::Done { value, .. } = it.step()? {
            return Ok(value);
        }
    }
}

/// Like [`estimate`], but gives up after `max_iterations` refinements.
pub fn estimate_bounded<R, S>(
    initial_guess: f64,
    refine: R,
    should_stop: S,
    max_iterations: u64,
) -> Result<f64, EstimateError>
where
    R: Refinement,
    S: StoppingRule,
{
    run_bounded(initial_guess, refine, should_stop, max_iterations, None)
}

/// Bounded run that also records every step.
pub fn estimate_traced<R, S>(
    initial_guess: f64,
    refine: R,
    should_stop: S,
    max_iterations: u64,
) -> Result<(f64, Trace), EstimateError>
where
    R: Refinement,
    S: StoppingRule,
{
    let mut trace = Trace::default();
    let value = run_bounded(
        initial_guess,
        refine,
        should_stop,
        max_iterations,
        Some(&mut trace),
    )?;
    Ok((value, trace))
}

fn run_bounded<R, S>(
    initial_guess: f64,
    refine: R,
    should_stop: S,
    max_iterations: u64,
    mut trace: Option<&mut Trace>,
) -> Result<f64, EstimateError>
where
    R: Refinement,
    S: StoppingRule,
{
    if max_iterations == 0 {
        return Err(EstimateError::invalid("max_iterations must be > 0"));
    }

    let mut it = Iteration::new(initial_guess, refine, should_stop)?;
    let mut previous = initial_guess;
    while it.state().iterations() < max_iterations {
        let state = it.step()?;
        if let Some(t) = trace.as_deref_mut() {
            t.push(Step {
                iteration: state.iterations(),
                estimate: state.value(),
                change: (state.value() - previous).abs(),
            });
        }
        previous = state.value();

        if let IterationState::Done { value, .. } = state {
            return Ok(value);
        }
    }

    warn!(max_iterations, last = previous, "iteration limit reached");
    Err(EstimateError::IterationLimit {
        iterations: max_iterations,
        last: previous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AbsoluteTolerance;
    use crate::testing::{CountingRefinement, Divergent};

    fn tol(eps: f64) -> AbsoluteTolerance {
        AbsoluteTolerance::new(eps).unwrap()
    }

    #[test]
    fn rejects_non_finite_initial_guess() {
        for g in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = estimate(g, |x: f64| x, tol(1e-9)).unwrap_err();
            assert!(err.is_invalid_input(), "guess {g} should be rejected");
        }
    }

    #[test]
    fn invalid_guess_is_reported_before_any_refinement() {
        let (spy, handle) = CountingRefinement::new(|x| x / 2.0);
        let err = estimate(f64::NAN, spy, tol(1e-9)).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(handle.count(), 0);
    }

    #[test]
    fn returns_first_candidate_that_passes_the_rule() {
        // 8 -> 4 -> 2 -> 1 -> 0.5 ...; |0.5 - 1| < 0.6 is the first hit
        let got = estimate(8.0, |x: f64| x / 2.0, tol(0.6)).unwrap();
        assert_eq!(got, 0.5);
    }

    #[test]
    fn refinement_runs_once_per_iteration() {
        let (spy, handle) = CountingRefinement::new(|x| x / 2.0);
        let mut it = Iteration::new(8.0, spy, tol(0.6)).unwrap();
        let mut states = vec![];
        loop {
            let s = it.step().unwrap();
            states.push(s);
            if s.is_done() {
                break;
            }
        }
        assert_eq!(handle.count(), 4);
        assert_eq!(
            states.last().copied(),
            Some(IterationState::Done {
                iterations: 4,
                value: 0.5
            })
        );
    }

    #[test]
    fn step_after_done_is_a_no_op() {
        let (spy, handle) = CountingRefinement::new(|_| 1.0);
        let mut it = Iteration::new(1.0, spy, tol(1e-3)).unwrap();
        let first = it.step().unwrap();
        assert!(first.is_done());
        assert_eq!(it.step().unwrap(), first);
        assert_eq!(handle.count(), 1);
    }

    #[test]
    fn closure_stopping_rules_are_honored() {
        let rule = |prev: f64, next: f64| (prev - next).abs() <= 1.0;
        let got = estimate(100.0, |x: f64| x - 10.0, |p: f64, n: f64| rule(p, n) || n < 55.0).unwrap();
        assert_eq!(got, 50.0);
    }

    #[test]
    fn bounded_reports_iteration_limit() {
        let err = estimate_bounded(0.0, Divergent, tol(1e-6), 25).unwrap_err();
        assert_eq!(
            err,
            EstimateError::IterationLimit {
                iterations: 25,
                last: 25.0
            }
        );
    }

    #[test]
    fn bounded_zero_ceiling_is_invalid() {
        let err = estimate_bounded(1.0, |x: f64| x, tol(1e-6), 0).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn bounded_matches_unbounded_when_converging() {
        let f = |x: f64| 0.5 * x + 1.0;
        let a = estimate(10.0, f, tol(1e-12)).unwrap();
        let b = estimate_bounded(10.0, f, tol(1e-12), 1_000).unwrap();
        assert_eq!(a, b);
        assert!((a - 2.0).abs() < 1e-11);
    }

    #[test]
    fn non_finite_candidate_is_an_error() {
        let err = estimate(1.0, |x: f64| x * 1e300, tol(1e-6)).unwrap_err();
        assert_eq!(err, EstimateError::NonFinite { iteration: 2 });
    }

    #[test]
    fn trace_records_every_step() {
        let (value, trace) = estimate_traced(8.0, |x: f64| x / 2.0, tol(0.6), 100).unwrap();
        assert_eq!(value, 0.5);
        assert_eq!(trace.len(), 4);
        assert_eq!(trace.estimates().collect::<Vec<_>>(), vec![4.0, 2.0, 1.0, 0.5]);
        let changes: Vec<f64> = trace.steps().iter().map(|s| s.change).collect();
        assert_eq!(changes, vec![4.0, 2.0, 1.0, 0.5]);
        assert_eq!(trace.latest().unwrap().iteration, 4);
    }

    #[test]
    fn runs_are_deterministic() {
        let f = |x: f64| (x + 2.0 / x) / 2.0;
        let (a, ta) = estimate_traced(5.0, f, tol(1e-12), 100).unwrap();
        let (b, tb) = estimate_traced(5.0, f, tol(1e-12), 100).unwrap();
        assert_eq!(a, b);
        assert_eq!(ta.steps(), tb.steps());
    }
}
