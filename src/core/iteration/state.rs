/// Lifecycle of one estimation run.
///
/// A run starts `Running` and moves to `Done` exactly once, when the stopping
/// rule accepts a candidate. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IterationState {
    Running { iteration: u64, current: f64 },
    Done { iterations: u64, value: f64 },
}

impl IterationState {
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self, IterationState::Done { .. })
    }

    /// Current estimate while running, final value once done.
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            IterationState::Running { current, .. } => current,
            IterationState::Done { value, .. } => value,
        }
    }

    /// Number of refinements applied so far.
    #[inline]
    pub fn iterations(&self) -> u64 {
        match *self {
            IterationState::Running { iteration, .. } => iteration,
            IterationState::Done { iterations, .. } => iterations,
        }
    }
}
