mod input_sampler;
mod series_evaluation;
mod square_root_tabulation;
mod task;

pub use input_sampler::{InputSampler, MAX_INPUTS};
pub use series_evaluation::SeriesEvaluation;
pub use square_root_tabulation::SquareRootTabulation;
pub use task::Task;
