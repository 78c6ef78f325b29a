/// Summarized scalar metric of a comparison table.
///
/// Typical examples: `"rows"`, `"max_abs_error"`, `"mean_abs_error"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
