/// Online summary of absolute errors.
///
/// Implementations accept values incrementally via [`add`] and expose the
/// current summary via [`value`].
pub trait ErrorAccumulator {
    /// Incorporates a new absolute error. NaN observations are skipped.
    fn add(&mut self, err: f64);

    /// Returns the current summary; NaN while nothing has been observed.
    fn value(&self) -> f64;
}
