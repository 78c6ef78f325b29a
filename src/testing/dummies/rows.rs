use crate::evaluation::Comparison;

/// Two rows with round numbers, handy for export golden files.
pub fn sample_rows() -> Vec<Comparison> {
    vec![
        Comparison::new(4.0, 2.0, 2.0),
        Comparison::new(2.0, 1.5, 1.25),
    ]
}
