use crate::tasks::SquareRootTabulation;
use crate::ui::types::build::{BuildError, build_inputs};
use crate::ui::types::choices::SquareRootTableParams;

impl TryFrom<SquareRootTableParams> for SquareRootTabulation {
    type Error = BuildError;

    fn try_from(p: SquareRootTableParams) -> Result<Self, Self::Error> {
        let sampler = build_inputs(p.inputs)?;
        Ok(SquareRootTabulation::new(
            &sampler,
            p.initial_guess,
            p.tolerance,
            p.max_iterations,
        )?)
    }
}
