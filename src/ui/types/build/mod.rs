mod error;
mod inputs;
mod tasks;

pub use error::BuildError;

pub use inputs::build_inputs;
pub use tasks::build_task;
