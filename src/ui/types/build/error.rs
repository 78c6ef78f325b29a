use crate::core::EstimateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}
