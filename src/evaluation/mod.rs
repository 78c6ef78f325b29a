mod accumulators;
mod comparison;
mod measurement;
mod table;

pub use accumulators::{ErrorAccumulator, MaxAbsoluteError, MeanAbsoluteError};
pub use comparison::Comparison;
pub use measurement::Measurement;
pub use table::{ComparisonTable, TableFormat};
