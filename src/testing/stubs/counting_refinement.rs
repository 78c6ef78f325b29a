use crate::core::Refinement;
use std::cell::Cell;
use std::rc::Rc;

/// Wraps a refinement and counts how many times it was applied.
pub struct CountingRefinement<F> {
    inner: F,
    calls: Rc<Cell<usize>>,
}

pub struct SpyHandle {
    calls: Rc<Cell<usize>>,
}

impl SpyHandle {
    pub fn count(&self) -> usize {
        self.calls.get()
    }
}

impl<F: Fn(f64) -> f64> CountingRefinement<F> {
    pub fn new(inner: F) -> (Self, SpyHandle) {
        let calls = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                calls: Rc::clone(&calls),
            },
            SpyHandle { calls },
        )
    }
}

impl<F: Fn(f64) -> f64> Refinement for CountingRefinement<F> {
    fn refine(&self, x: f64) -> f64 {
        self.calls.set(self.calls.get() + 1);
        (self.inner)(x)
    }
}
