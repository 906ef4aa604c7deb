//! Core types for cost regression plotting
//!
//! This crate holds what every other crate in the workspace shares: the
//! unified [`Error`] type and the [`CostSeries`] container for measured
//! `(x, y)` cost pairs.
//!
//! # Example
//!
//! ```rust
//! use cost_core::CostSeries;
//!
//! let series: CostSeries = vec![(1.0, 0.0), (2.0, 1.0), (4.0, 2.0)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(series.len(), 3);
//! ```

pub mod error;
pub mod series;

// Re-export core types
pub use error::{Error, Result};
pub use series::CostSeries;
