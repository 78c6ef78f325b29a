use crate::evaluation::accumulators::ErrorAccumulator;

#[derive(Debug, Default, Clone, Copy)]
pub struct MaxAbsoluteError {
    max: Option<f64>,
}

impl ErrorAccumulator for MaxAbsoluteError {
    #[inline]
    fn add(&mut self, err: f64) {
        if err.is_nan() {
            return;
        }
        let err = err.abs();
        self.max = Some(self.max.map_or(err, |m| m.max(err)));
    }

    #[inline]
    fn value(&self) -> f64 {
        self.max.unwrap_or(f64::NAN)
    }
}
