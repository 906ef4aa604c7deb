//! Fitted curve sampling over a log-spaced domain

use crate::types::LogRegression;

/// Smallest decade of the fitted curve domain (`10^0`)
pub const CURVE_START_EXP: f64 = 0.0;
/// Largest decade of the fitted curve domain (`10^8`)
pub const CURVE_STOP_EXP: f64 = 8.0;
/// Number of points on the fitted curve
pub const CURVE_POINTS: usize = 50;

/// `num` values spaced evenly on a base 10 log scale, endpoints included
///
/// Returns `10^start_exp ..= 10^stop_exp`. A single point yields
/// `10^start_exp`; zero points yield an empty vector.
pub fn logspace(start_exp: f64, stop_exp: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![10f64.powf(start_exp)],
        _ => {
            let step = (stop_exp - start_exp) / (num - 1) as f64;
            (0..num)
                .map(|i| 10f64.powf(start_exp + step * i as f64))
                .collect()
        }
    }
}

/// Points of a fitted model sampled over a synthetic domain
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl FittedCurve {
    /// Sample `model` at each `x`
    pub fn sample(model: &LogRegression, x: Vec<f64>) -> Self {
        let y = x.iter().map(|&v| model.predict(v)).collect();
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Sample `model` over 50 points from `10^0` to `10^8`
pub fn fitted_curve(model: &LogRegression) -> FittedCurve {
    FittedCurve::sample(
        model,
        logspace(CURVE_START_EXP, CURVE_STOP_EXP, CURVE_POINTS),
    )
}
