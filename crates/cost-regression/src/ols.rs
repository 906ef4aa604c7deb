//! Simple linear regression with significance statistics

use crate::types::LogRegression;
use cost_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

/// Guards the t statistic against division by zero for a perfect fit
const TINY: f64 = 1.0e-20;

/// Result of an ordinary least squares fit `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r_value: f64,
    /// Two-sided p-value for the null hypothesis `slope == 0`
    pub p_value: f64,
    /// Standard error of the slope
    pub std_err: f64,
    /// Standard error of the intercept
    pub intercept_std_err: f64,
    pub sample_size: usize,
}

/// Fit `y = slope * x + intercept` by ordinary least squares
///
/// # Errors
///
/// * [`Error::InvalidInput`] if `x` and `y` differ in length
/// * [`Error::InsufficientData`] with fewer than two points
/// * [`Error::Computation`] if the inputs are not finite or all `x` are equal
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "regression input"));
    }
    let n = x.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(Error::non_finite("regression input"));
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(Error::Computation(
            "cannot fit a line when all x values are identical".to_string(),
        ));
    }

    let n_f = n as f64;
    let mean_x = x.iter().sum::<f64>() / n_f;
    let mean_y = y.iter().sum::<f64>() / n_f;

    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let r_value = if syy == 0.0 {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };

    let (p_value, std_err, intercept_std_err) = if n == 2 {
        // A line through two points is exact
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        (p, 0.0, 0.0)
    } else {
        let df = (n - 2) as f64;
        let t = r_value * (df / ((1.0 - r_value + TINY) * (1.0 + r_value + TINY))).sqrt();
        let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
            Error::Computation(format!("Failed to create t-distribution: {}", e))
        })?;
        let p = 2.0 * t_dist.cdf(-t.abs());

        let std_err = ((1.0 - r_value * r_value) * syy / sxx / df).sqrt();
        let intercept_std_err = std_err * (sxx / n_f + mean_x * mean_x).sqrt();
        (p, std_err, intercept_std_err)
    };

    debug!(n, slope, intercept, r_value, p_value, "linear regression complete");

    Ok(LinearFit {
        slope,
        intercept,
        r_value,
        p_value,
        std_err,
        intercept_std_err,
        sample_size: n,
    })
}

/// Fit `y = slope * log2(x) + intercept`
///
/// Every `x` must be strictly positive.
///
/// # Errors
///
/// Everything [`linear_regression`] reports, plus [`Error::InvalidInput`]
/// for the first `x <= 0`. A NaN or infinite `x` is reported like a
/// non-finite `y`, as [`Error::Computation`].
pub fn fit_log2(x: &[f64], y: &[f64]) -> Result<LogRegression> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "regression input"));
    }

    let log_x = x
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if !v.is_finite() {
                Err(Error::non_finite("regression input"))
            } else if v > 0.0 {
                Ok(v.log2())
            } else {
                Err(Error::non_positive(v, i))
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    linear_regression(&log_x, y).map(LogRegression::from)
}
