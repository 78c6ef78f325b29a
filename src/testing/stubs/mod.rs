pub mod counting_refinement;
pub mod divergent;
pub mod fixed_series;

pub use counting_refinement::{CountingRefinement, SpyHandle};
pub use divergent::Divergent;
pub use fixed_series::FixedSeries;
