pub(crate) mod error;
pub mod iteration;

pub use error::EstimateError;
pub use iteration::{
    AbsoluteTolerance, DEFAULT_TOLERANCE, Iteration, IterationState, Refinement, Step,
    StoppingRule, Trace, estimate, estimate_bounded, estimate_traced,
};
