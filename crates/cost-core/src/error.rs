//! Error types for cost regression plotting
//!
//! Provides a unified error type for all cost-plot crates.

use thiserror::Error;

/// Core error type for loading, fitting and rendering cost data
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Plot backend failure
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a value outside the domain of the logarithm
    pub fn non_positive(value: f64, index: usize) -> Self {
        Self::InvalidInput(format!(
            "x[{index}] = {value} is not positive; log2 is undefined"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("x and y differ".to_string());
        assert_eq!(err.to_string(), "Invalid input: x and y differ");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Computation("zero variance".to_string());
        assert_eq!(err.to_string(), "Computation error: zero variance");

        let err = Error::Render("no font".to_string());
        assert_eq!(err.to_string(), "Render error: no font");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::size_mismatch(4, 3, "regression input");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in regression input: expected 4, got 3"
        );

        let err = Error::non_positive(0.0, 2);
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("x[2] = 0"));

        let err = Error::non_finite("transformed x");
        assert_eq!(
            err.to_string(),
            "Computation error: transformed x contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(ref inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
                assert!(err.to_string().contains("file not found"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }
}
