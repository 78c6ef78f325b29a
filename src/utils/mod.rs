pub mod math;
pub mod naming;
