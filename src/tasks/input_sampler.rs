use crate::core::EstimateError;
use crate::core::error::{ensure_finite, ensure_positive};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest number of inputs a sampler may produce.
pub const MAX_INPUTS: u64 = 1_000_000;

/// Where the inputs of a tabulation come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSampler {
    /// `start, start + step, ...` while below `stop`.
    Range { start: f64, stop: f64, step: f64 },
    /// `count` uniform draws from `[low, high)`.
    Random {
        count: u64,
        low: f64,
        high: f64,
        seed: u64,
    },
}

impl InputSampler {
    pub fn validate(&self) -> Result<(), EstimateError> {
        match *self {
            InputSampler::Range { start, stop, step } => {
                ensure_finite("start", start)?;
                ensure_finite("stop", stop)?;
                ensure_positive("step", step)?;
                if stop <= start {
                    return Err(EstimateError::invalid(format!(
                        "stop ({stop}) must be greater than start ({start})"
                    )));
                }
                let rows = ((stop - start) / step).ceil();
                if !rows.is_finite() || rows > MAX_INPUTS as f64 {
                    return Err(EstimateError::invalid(format!(
                        "range yields {rows} inputs, more than the limit of {MAX_INPUTS}"
                    )));
                }
            }
            InputSampler::Random {
                count, low, high, ..
            } => {
                if count == 0 {
                    return Err(EstimateError::invalid("count must be > 0"));
                }
                if count > MAX_INPUTS {
                    return Err(EstimateError::invalid(format!(
                        "count ({count}) exceeds the limit of {MAX_INPUTS}"
                    )));
                }
                ensure_finite("low", low)?;
                ensure_finite("high", high)?;
                if high <= low {
                    return Err(EstimateError::invalid(format!(
                        "high ({high}) must be greater than low ({low})"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn inputs(&self) -> Result<Vec<f64>, EstimateError> {
        self.validate()?;
        let out = match *self {
            InputSampler::Range { start, stop, step } => {
                // multiply instead of accumulating so the grid does not drift
                (0u64..)
                    .map(|i| start + i as f64 * step)
                    .take_while(|x| *x < stop)
                    .collect()
            }
            InputSampler::Random {
                count,
                low,
                high,
                seed,
            } => {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..count).map(|_| rng.random_range(low..high)).collect()
            }
        };
        Ok(out)
    }
}
