mod rows;

pub use rows::sample_rows;
