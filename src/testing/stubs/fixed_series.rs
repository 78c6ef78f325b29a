use crate::estimators::Series;

/// Series with an explicit list of terms; zero past the end.
#[derive(Debug, Clone)]
pub struct FixedSeries {
    pub terms: Vec<f64>,
}

impl FixedSeries {
    pub fn new(terms: Vec<f64>) -> Self {
        Self { terms }
    }
}

impl Series for FixedSeries {
    fn term(&self, k: u64) -> f64 {
        self.terms.get(k as usize).copied().unwrap_or(0.0)
    }
}
