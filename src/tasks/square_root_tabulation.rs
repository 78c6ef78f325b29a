use crate::core::error::ensure_positive;
use crate::core::{AbsoluteTolerance, EstimateError, estimate_bounded};
use crate::estimators::SquareRoot;
use crate::evaluation::{Comparison, ComparisonTable};
use crate::tasks::{InputSampler, Task};
use std::sync::mpsc::Sender;
use tracing::info;

/// Tabulates Newton square roots against `f64::sqrt` over a set of inputs.
pub struct SquareRootTabulation {
    inputs: Vec<f64>,
    initial_guess: Option<f64>,
    tolerance: AbsoluteTolerance,
    max_iterations: u64,

    table: ComparisonTable,

    progress_tx: Option<Sender<Comparison>>,
}

impl SquareRootTabulation {
    /// All parameters are validated here, so `run` only fails on inputs
    /// that do not converge within `max_iterations`.
    pub fn new(
        sampler: &InputSampler,
        initial_guess: Option<f64>,
        epsilon: f64,
        max_iterations: u64,
    ) -> Result<Self, EstimateError> {
        let inputs = sampler.inputs()?;
        for &a in &inputs {
            ensure_positive("radicand", a)?;
        }
        // a negative guess converges to -sqrt(a)
        if let Some(g) = initial_guess {
            ensure_positive("initial guess", g)?;
        }
        if max_iterations == 0 {
            return Err(EstimateError::invalid("max_iterations must be > 0"));
        }

        Ok(Self {
            inputs,
            initial_guess,
            tolerance: AbsoluteTolerance::new(epsilon)?,
            max_iterations,
            table: ComparisonTable::default(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Comparison>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }
}

impl Task for SquareRootTabulation {
    fn name(&self) -> &'static str {
        "square-root-table"
    }

    fn set_progress(&mut self, tx: Sender<Comparison>) {
        self.progress_tx = Some(tx);
    }

    fn run(&mut self) -> Result<(), EstimateError> {
        info!(
            inputs = self.inputs.len(),
            epsilon = self.tolerance.epsilon(),
            "tabulating square roots"
        );
        self.table = ComparisonTable::default();
        let tx = self.progress_tx.take();

        for &a in &self.inputs {
            let refine = SquareRoot::new(a)?;
            let guess = self.initial_guess.unwrap_or(refine.default_guess());

            let value = estimate_bounded(guess, refine, self.tolerance, self.max_iterations)?;
            let row = Comparison::new(a, value, a.sqrt());

            if let Some(tx) = &tx {
                let _ = tx.send(row);
            }
            self.table.push(row);
        }

        info!(rows = self.table.len(), "tabulation finished");
        Ok(())
    }

    fn table(&self) -> &ComparisonTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn one_to_nine() -> InputSampler {
        InputSampler::Range {
            start: 1.0,
            stop: 10.0,
            step: 1.0,
        }
    }

    #[test]
    fn ctor_guards() {
        let negative = InputSampler::Range {
            start: -2.0,
            stop: 2.0,
            step: 1.0,
        };
        assert!(
            SquareRootTabulation::new(&negative, None, 1e-10, 100)
                .err()
                .unwrap()
                .is_invalid_input()
        );

        let s = one_to_nine();
        assert!(SquareRootTabulation::new(&s, Some(0.0), 1e-10, 100).is_err());
        assert!(
            SquareRootTabulation::new(&s, Some(-3.0), 1e-10, 100)
                .err()
                .unwrap()
                .is_invalid_input()
        );
        assert!(SquareRootTabulation::new(&s, Some(f64::NAN), 1e-10, 100).is_err());
        assert!(SquareRootTabulation::new(&s, None, 0.0, 100).is_err());
        assert!(SquareRootTabulation::new(&s, None, 1e-10, 0).is_err());
        assert!(SquareRootTabulation::new(&s, None, 1e-10, 100).is_ok());
    }

    #[test]
    fn one_row_per_input_with_tiny_errors() {
        let mut t = SquareRootTabulation::new(&one_to_nine(), None, 1e-10, 100).unwrap();
        t.run().unwrap();

        assert_eq!(t.name(), "square-root-table");
        assert_eq!(t.table().len(), 9);
        for (row, a) in t.table().rows().iter().zip(1..10) {
            assert_eq!(row.input, a as f64);
            assert_eq!(row.reference, (a as f64).sqrt());
            assert!(row.abs_error < 1e-12, "a={a}, err={}", row.abs_error);
        }
        let perfect: Vec<f64> = t
            .table()
            .rows()
            .iter()
            .filter(|r| [1.0, 4.0, 9.0].contains(&r.input))
            .map(|r| r.estimate)
            .collect();
        assert_eq!(perfect, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn fixed_guess_is_used_for_every_input() {
        let mut t = SquareRootTabulation::new(&one_to_nine(), Some(3.0), 1e-7, 100).unwrap();
        t.run().unwrap();
        let four = t.table().rows()[3];
        assert_eq!(four.input, 4.0);
        assert!((four.estimate - 2.0).abs() < 1e-7);
    }

    #[test]
    fn progress_channel_sees_every_row_then_closes() {
        let (tx, rx) = mpsc::channel();
        let mut t = SquareRootTabulation::new(&one_to_nine(), None, 1e-10, 100)
            .unwrap()
            .with_progress(tx);
        t.run().unwrap();

        let streamed: Vec<Comparison> = rx.iter().collect();
        assert_eq!(streamed.as_slice(), t.table().rows());
    }

    #[test]
    fn rerun_replaces_the_table() {
        let mut t = SquareRootTabulation::new(&one_to_nine(), None, 1e-10, 100).unwrap();
        t.run().unwrap();
        t.run().unwrap();
        assert_eq!(t.table().len(), 9);
    }

    #[test]
    fn tight_iteration_ceiling_surfaces_as_error() {
        let s = InputSampler::Range {
            start: 1e6,
            stop: 1e6 + 1.0,
            step: 1.0,
        };
        let mut t = SquareRootTabulation::new(&s, Some(1.0), 1e-10, 3).unwrap();
        let err = t.run().unwrap_err();
        assert!(matches!(
            err,
            EstimateError::IterationLimit { iterations: 3, .. }
        ));
    }

    #[test]
    fn random_inputs_are_tabulated() {
        let s = InputSampler::Random {
            count: 25,
            low: 0.5,
            high: 500.0,
            seed: 42,
        };
        let mut t = SquareRootTabulation::new(&s, None, 1e-10, 1_000).unwrap();
        assert_eq!(t.inputs().len(), 25);
        t.run().unwrap();
        let summary = t.table().summary();
        assert_eq!(summary[0].value, 25.0);
        assert!(summary[1].value < 1e-9);
    }
}
