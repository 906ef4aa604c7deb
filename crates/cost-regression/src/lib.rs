//! Logarithmic cost regression
//!
//! Operation costs of balanced tree structures grow with the logarithm of
//! the number of stored elements. This crate fits
//! `cost = slope * log2(count) + intercept` by ordinary least squares and
//! reports the usual significance statistics alongside the coefficients.
//!
//! # Example
//!
//! ```rust
//! use cost_regression::{fit_log2, fitted_curve};
//!
//! let x = vec![1.0, 2.0, 4.0, 8.0];
//! let y = vec![0.0, 1.0, 2.0, 3.0];
//!
//! let model = fit_log2(&x, &y).unwrap();
//! assert!((model.slope() - 1.0).abs() < 1e-12);
//! assert!(model.intercept().abs() < 1e-12);
//!
//! let curve = fitted_curve(&model);
//! assert_eq!(curve.len(), 50);
//! ```

mod curve;
mod ols;
mod types;

pub use cost_core::{Error, Result};
pub use curve::{
    fitted_curve, logspace, FittedCurve, CURVE_POINTS, CURVE_START_EXP, CURVE_STOP_EXP,
};
pub use ols::{fit_log2, linear_regression, LinearFit};
pub use types::LogRegression;
