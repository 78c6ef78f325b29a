mod exponential;
mod ramanujan;
mod series;
mod square_root;

pub use exponential::ExponentialSeries;
pub use ramanujan::RamanujanPi;
pub use series::{
    DEFAULT_TERM_THRESHOLD, Series, SeriesSummation, sum_series, sum_series_bounded,
};
pub use square_root::{SquareRoot, square_root};
