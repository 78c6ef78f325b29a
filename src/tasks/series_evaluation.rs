use crate::core::EstimateError;
use crate::core::error::{ensure_finite, ensure_positive};
use crate::estimators::{Series, sum_series_bounded};
use crate::evaluation::{Comparison, ComparisonTable};
use crate::tasks::Task;
use std::sync::mpsc::Sender;
use tracing::info;

/// Sums one series and compares the result to a known value.
///
/// `input` is only a label for the table row (the exponent for `e^x`, for
/// example).
pub struct SeriesEvaluation {
    name: &'static str,
    series: Box<dyn Series + Send>,
    input: f64,
    reference: f64,
    threshold: f64,
    max_terms: u64,

    table: ComparisonTable,

    progress_tx: Option<Sender<Comparison>>,
}

impl SeriesEvaluation {
    pub fn new(
        name: &'static str,
        series: Box<dyn Series + Send>,
        input: f64,
        reference: f64,
        threshold: f64,
        max_terms: u64,
    ) -> Result<Self, EstimateError> {
        ensure_finite("reference", reference)?;
        ensure_positive("term threshold", threshold)?;
        if max_terms == 0 {
            return Err(EstimateError::invalid("max_terms must be > 0"));
        }

        Ok(Self {
            name,
            series,
            input,
            reference,
            threshold,
            max_terms,
            table: ComparisonTable::default(),
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Comparison>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}

impl Task for SeriesEvaluation {
    fn name(&self) -> &'static str {
        self.name
    }

    fn set_progress(&mut self, tx: Sender<Comparison>) {
        self.progress_tx = Some(tx);
    }

    fn run(&mut self) -> Result<(), EstimateError> {
        info!(series = self.name, threshold = self.threshold, "summing series");
        self.table = ComparisonTable::default();
        let tx = self.progress_tx.take();

        let value = sum_series_bounded(self.series.as_ref(), self.threshold, self.max_terms)?;
        let row = Comparison::new(self.input, value, self.reference);
        if let Some(tx) = &tx {
            let _ = tx.send(row);
        }
        self.table.push(row);

        info!(series = self.name, abs_error = row.abs_error, "series summed");
        Ok(())
    }

    fn table(&self) -> &ComparisonTable {
        &self.table
    }
}
