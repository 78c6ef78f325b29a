use crate::tasks::InputSampler;
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::InputChoice;

pub fn build_inputs(choice: InputChoice) -> Result<InputSampler, BuildError> {
    let sampler = match choice {
        InputChoice::Range(p) => InputSampler::Range {
            start: p.start,
            stop: p.stop,
            step: p.step,
        },
        InputChoice::Random(p) => InputSampler::Random {
            count: p.count,
            low: p.low,
            high: p.high,
            seed: p.seed,
        },
    };
    sampler.validate()?;
    Ok(sampler)
}
