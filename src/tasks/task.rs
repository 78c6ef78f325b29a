use crate::core::EstimateError;
use crate::evaluation::{Comparison, ComparisonTable};
use std::sync::mpsc::Sender;

/// A runnable job that fills a [`ComparisonTable`].
///
/// Rows are also sent on the progress channel, if one is attached, as soon
/// as they are computed. The channel is released when `run` returns so that
/// receivers see the end of the stream.
pub trait Task {
    fn name(&self) -> &'static str;

    fn set_progress(&mut self, tx: Sender<Comparison>);

    fn run(&mut self) -> Result<(), EstimateError>;

    fn table(&self) -> &ComparisonTable;
}
