//! Utilities for working with probabilities and short numeric series.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn mean(&self) -> f64;
    fn population_stdev(&self, mean: f64) -> f64;
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Arithmetic mean; `NaN` for an empty slice.
    fn mean(&self) -> f64 {
        self.sum() / self.len() as f64
    }

    /// Population standard deviation about a previously computed `mean`.
    fn population_stdev(&self, mean: f64) -> f64 {
        let variance = self
            .iter()
            .map(|&value| (value - mean).powi(2))
            .sum::<f64>()
            / self.len() as f64;
        variance.sqrt()
    }
}

/// Rounds `value` to `decimals` places, with halves rounded away from zero.
#[inline]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Expresses a probability in `[0, 1]` as a percentage rounded to one decimal place.
#[inline]
pub fn percent(probability: f64) -> f64 {
    round_to(probability * 100.0, 1)
}

/// Complements a percentage. The result is re-rounded so that the pair sums to exactly `100`
/// at the displayed precision.
#[inline]
pub fn complement_percent(percentage: f64) -> f64 {
    round_to(100.0 - percentage, 1)
}
