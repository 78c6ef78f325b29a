/// `n!` as a float. Exact up to `22!`, overflows to infinity past `170!`.
pub fn factorial(n: u64) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// `ln(n!)`, finite for every `n` the series code can reach.
#[inline]
pub fn ln_factorial(n: u64) -> f64 {
    libm::lgamma(n as f64 + 1.0)
}
