use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// One refinement: the estimate it produced and how far it moved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub iteration: u64,
    pub estimate: f64,
    pub change: f64,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "iter={}, estimate={:.15}, change={:.3e}",
            self.iteration, self.estimate, self.change
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn push(&mut self, step: Step) {
        self.steps.push(step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn latest(&self) -> Option<Step> {
        self.steps.last().copied()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps.iter().map(|s| s.estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_latest_none() {
        let t = Trace::default();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.latest().is_none());
    }

    #[test]
    fn push_keeps_order() {
        let mut t = Trace::default();
        t.push(Step {
            iteration: 1,
            estimate: 2.5,
            change: 0.5,
        });
        t.push(Step {
            iteration: 2,
            estimate: 2.05,
            change: 0.45,
        });
        assert_eq!(t.len(), 2);
        assert_eq!(t.latest().unwrap().iteration, 2);
        assert_eq!(t.estimates().collect::<Vec<_>>(), vec![2.5, 2.05]);
    }

    #[test]
    fn display_is_compact() {
        let s = Step {
            iteration: 3,
            estimate: 2.0,
            change: 0.001,
        };
        assert_eq!(
            s.to_string(),
            "iter=3, estimate=2.000000000000000, change=1.000e-3"
        );
    }
}
