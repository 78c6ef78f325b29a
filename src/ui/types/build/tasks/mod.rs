use crate::tasks::{SquareRootTabulation, Task};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::TaskChoice;

mod series;
mod square_root_table;

pub fn build_task(choice: TaskChoice) -> Result<Box<dyn Task + Send>, BuildError> {
    match choice {
        TaskChoice::SquareRootTable(p) => {
            let t = SquareRootTabulation::try_from(p)?;
            Ok(Box::new(t))
        }
        TaskChoice::RamanujanPi(p) => Ok(Box::new(series::ramanujan_pi(p)?)),
        TaskChoice::Exponential(p) => Ok(Box::new(series::exponential(p)?)),
    }
}
