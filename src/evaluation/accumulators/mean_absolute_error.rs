use crate::evaluation::accumulators::ErrorAccumulator;

/// Streaming mean: `sum / len`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanAbsoluteError {
    len: f64,
    sum: f64,
}

impl ErrorAccumulator for MeanAbsoluteError {
    #[inline]
    fn add(&mut self, err: f64) {
        if err.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += err.abs();
    }

    #[inline]
    fn value(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}
