//! Linear regression of short series.

use linregress::fit_low_level_regression_model;
use tracing::debug;

/// Ordinary-least-squares fit `y = intercept + slope·x` of a series against its 0-based index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexFit {
    pub slope: f64,
    pub intercept: f64,
}
impl IndexFit {
    /// Fits the series; `None` when fewer than two points are supplied, in which case the slope
    /// is undefined. Should the regression fail to converge, the series is treated as flat about
    /// its mean.
    pub fn fit(series: &[f64]) -> Option<Self> {
        let rows = series.len();
        if rows < 2 {
            return None;
        }

        // row-major: response, intercept, index
        const COLS: usize = 3;
        let mut data = Vec::with_capacity(rows * COLS);
        for (index, &y) in series.iter().enumerate() {
            data.extend_from_slice(&[y, 1.0, index as f64]);
        }

        match fit_low_level_regression_model(&data, rows, COLS) {
            Ok(model) => {
                let parameters = model.parameters();
                Some(Self {
                    intercept: parameters[0],
                    slope: parameters[1],
                })
            }
            Err(err) => {
                debug!("regression over {rows} points failed: {err}");
                Some(Self {
                    slope: 0.0,
                    intercept: series.iter().sum::<f64>() / rows as f64,
                })
            }
        }
    }

    pub fn predict(&self, index: usize) -> f64 {
        self.intercept + self.slope * index as f64
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn too_few_points() {
        assert_eq!(None, IndexFit::fit(&[]));
        assert_eq!(None, IndexFit::fit(&[3.0]));
    }

    #[test]
    fn exact_line() {
        let fit = IndexFit::fit(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_float_absolute_eq!(1.0, fit.slope, 1e-12);
        assert_float_absolute_eq!(1.0, fit.intercept, 1e-12);
        assert_float_absolute_eq!(6.0, fit.predict(5), 1e-12);
    }

    #[test]
    fn exact_falling_line() {
        let fit = IndexFit::fit(&[5.0, 4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_float_absolute_eq!(-1.0, fit.slope, 1e-12);
        assert_float_absolute_eq!(5.0, fit.intercept, 1e-12);
    }

    #[test]
    fn flat_series() {
        let fit = IndexFit::fit(&[4.0, 4.0, 4.0]).unwrap();
        assert_float_absolute_eq!(0.0, fit.slope, 1e-12);
        assert_float_absolute_eq!(4.0, fit.intercept, 1e-12);
    }

    #[test]
    fn noisy_series() {
        // slope = Σ(dx·dy) / Σdx² = (-1·-2 + 0·1 + 1·1) / 2 = 1.5
        let fit = IndexFit::fit(&[2.0, 5.0, 5.0]).unwrap();
        assert_float_absolute_eq!(1.5, fit.slope, 1e-12);
        assert_float_absolute_eq!(2.5, fit.intercept, 1e-12);
    }

    #[test]
    fn always_finite() {
        for series in [
            vec![0.0, 0.0, 0.0],
            vec![3.0, 7.0],
            vec![1.0, 1.0, 1.0, 1.0, 9.0],
        ] {
            let fit = IndexFit::fit(&series).unwrap();
            assert!(fit.slope.is_finite(), "{series:?}: {fit:?}");
            assert!(fit.intercept.is_finite(), "{series:?}: {fit:?}");
        }
    }
}
