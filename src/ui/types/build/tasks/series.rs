use crate::estimators::{ExponentialSeries, RamanujanPi};
use crate::tasks::SeriesEvaluation;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{ExponentialParams, SeriesParams};
use std::f64::consts::PI;

// e^x overflows an f64 just past 709.78
const MAX_EXPONENT: f64 = 700.0;

pub fn ramanujan_pi(p: SeriesParams) -> Result<SeriesEvaluation, BuildError> {
    Ok(SeriesEvaluation::new(
        "ramanujan-pi",
        Box::new(RamanujanPi),
        0.0,
        PI,
        p.threshold,
        p.max_terms,
    )?)
}

pub fn exponential(p: ExponentialParams) -> Result<SeriesEvaluation, BuildError> {
    if p.x.abs() > MAX_EXPONENT {
        return Err(BuildError::InvalidParameter(format!(
            "exponent must be within ±{MAX_EXPONENT} (got {})",
            p.x
        )));
    }
    let series = ExponentialSeries::new(p.x)?;
    let task = SeriesEvaluation::new(
        "exponential",
        Box::new(series),
        p.x,
        p.x.exp(),
        p.threshold,
        p.max_terms,
    )?;

    if series.terms_needed(p.threshold, p.max_terms).is_none() {
        return Err(BuildError::InvalidParameter(format!(
            "max_terms ({}) is too small for terms of e^{} to fall below {:e}",
            p.max_terms, p.x, p.threshold
        )));
    }
    Ok(task)
}
