pub mod dummies;
pub mod stubs;

pub use dummies::sample_rows;
pub use stubs::{CountingRefinement, Divergent, FixedSeries, SpyHandle};
