use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no convergence after {iterations} iterations (last estimate: {last})")]
    IterationLimit { iterations: u64, last: f64 },

    #[error("estimate became non-finite at iteration {iteration}")]
    NonFinite { iteration: u64 },
}

impl EstimateError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        EstimateError::InvalidInput(msg.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EstimateError::InvalidInput(_))
    }
}

pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<(), EstimateError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EstimateError::invalid(format!(
            "{name} must be finite (got {value})"
        )))
    }
}

pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<(), EstimateError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(EstimateError::invalid(format!("{name} must be > 0 (got {value})")))
    }
}
