//! Types used for log2 cost regression

use crate::ols::LinearFit;
use std::fmt;

/// Fitted model `y = slope * log2(x) + intercept`
///
/// Produced by [`fit_log2`](crate::fit_log2). All statistics refer to the
/// regression of `y` on `log2(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRegression {
    slope: f64,
    intercept: f64,
    r_value: f64,
    p_value: f64,
    std_err: f64,
    intercept_std_err: f64,
    sample_size: usize,
}

impl LogRegression {
    /// Cost increase per doubling of `x`
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Predicted cost at `x = 1`
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Pearson correlation between `log2(x)` and `y`
    pub fn r_value(&self) -> f64 {
        self.r_value
    }

    /// Fraction of the variance in `y` explained by the model
    pub fn r_squared(&self) -> f64 {
        self.r_value * self.r_value
    }

    /// Two-sided p-value for a zero slope
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Standard error of the slope
    pub fn std_err(&self) -> f64 {
        self.std_err
    }

    /// Standard error of the intercept
    pub fn intercept_std_err(&self) -> f64 {
        self.intercept_std_err
    }

    /// Number of points the model was fitted on
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Evaluate the model at an untransformed `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x.log2() + self.intercept
    }

    /// Write the regression report to standard output
    pub fn print_summary(&self) {
        print!("{self}");
    }
}

impl From<LinearFit> for LogRegression {
    fn from(fit: LinearFit) -> Self {
        Self {
            slope: fit.slope,
            intercept: fit.intercept,
            r_value: fit.r_value,
            p_value: fit.p_value,
            std_err: fit.std_err,
            intercept_std_err: fit.intercept_std_err,
            sample_size: fit.sample_size,
        }
    }
}

impl fmt::Display for LogRegression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slope: {}", self.slope)?;
        writeln!(f, "Intercept: {}", self.intercept)?;
        writeln!(f, "R-squared: {}", self.r_squared())?;
        writeln!(f, "P-value: {}", self.p_value)?;
        writeln!(f, "Standard error: {}", self.std_err)
    }
}
