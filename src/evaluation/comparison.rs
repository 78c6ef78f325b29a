use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// One tabulated input: what the estimator produced next to a trusted value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub input: f64,
    pub estimate: f64,
    pub reference: f64,
    pub abs_error: f64,
}

impl Comparison {
    pub fn new(input: f64, estimate: f64, reference: f64) -> Self {
        Self {
            input,
            estimate,
            reference,
            abs_error: (estimate - reference).abs(),
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:<12} {:<20.15} {:<20.15} {:.3e}",
            self.input, self.estimate, self.reference, self.abs_error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_error_is_computed() {
        let c = Comparison::new(2.0, 1.5, 1.25);
        assert_eq!(c.abs_error, 0.25);
        let c = Comparison::new(2.0, 1.0, 1.25);
        assert_eq!(c.abs_error, 0.25);
    }

    #[test]
    fn display_aligns_columns() {
        let c = Comparison::new(4.0, 2.0, 2.0);
        assert_eq!(
            c.to_string(),
            "4            2.000000000000000    2.000000000000000    0.000e0"
        );
    }
}
