pub mod inquire_driver;
mod prompt_driver;
#[cfg(test)]
mod scripted_driver;

pub use inquire_driver::InquireDriver;
pub use prompt_driver::PromptDriver;
#[cfg(test)]
pub(crate) use scripted_driver::ScriptedDriver;
