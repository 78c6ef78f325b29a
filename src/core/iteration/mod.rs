mod driver;
mod refinement;
mod state;
mod stopping_rule;
mod trace;

pub use driver::{Iteration, estimate, estimate_bounded, estimate_traced};
pub use refinement::Refinement;
pub use state::IterationState;
pub use stopping_rule::{AbsoluteTolerance, DEFAULT_TOLERANCE, StoppingRule};
pub use trace::{Step, Trace};
