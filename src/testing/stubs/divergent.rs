use crate::core::Refinement;

/// Walks away from every starting point: `x -> x + 1`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Divergent;

impl Refinement for Divergent {
    fn refine(&self, x: f64) -> f64 {
        x + 1.0
    }
}
