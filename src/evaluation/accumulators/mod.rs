mod error_accumulator;
mod max_absolute_error;
mod mean_absolute_error;

pub use error_accumulator::ErrorAccumulator;
pub use max_absolute_error::MaxAbsoluteError;
pub use mean_absolute_error::MeanAbsoluteError;
