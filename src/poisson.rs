//! Poisson probabilities of discrete card counts.

use crate::factorial;
use crate::factorial::{Factorial, MAX_EXACT};

/// Probability of exactly `k` events given the rate `lambda`. A non-positive `lambda` is
/// treated as a degenerate distribution with all of its mass at zero.
///
/// # Panics
/// If `k` exceeds [`MAX_EXACT`] and `lambda` is positive, as `k!` no longer fits the
/// `factorial`'s integer range. Use [`pmf`] for unbounded counts.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    if lambda <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}

/// Probability mass function over the shared factorial table, for any `k`.
pub fn pmf(k: u32, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if k <= MAX_EXACT as u32 {
        univariate(k as u8, lambda, &factorial::LOOKUP)
    } else {
        lambda.powi(k as i32) * f64::exp(-lambda) / factorial::factorial(k as i64)
    }
}

/// Cumulative complement `P(X ≥ k)`. An "Over N.5" line is priced with `k = N + 1`.
pub fn at_least(k: u32, lambda: f64) -> f64 {
    let below = (0..k).map(|i| pmf(i, lambda)).sum::<f64>();
    1.0 - below
}
