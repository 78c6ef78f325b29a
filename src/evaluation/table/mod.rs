mod comparison_table;

pub use comparison_table::{ComparisonTable, TableFormat};
