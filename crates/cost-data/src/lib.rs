//! Loading measured cost series from CSV
//!
//! The measurement harness writes one `count,cost` record per batch without
//! a header row; hand-edited files often add one. Both forms load into the
//! same [`CostSeries`].
//!
//! ```rust
//! use cost_data::load_series_from_reader;
//!
//! let series = load_series_from_reader("1,0\n2,1\n".as_bytes()).unwrap();
//! assert_eq!(series.x(), &[1.0, 2.0]);
//! ```

mod loader;

pub use cost_core::{CostSeries, Error, Result};
pub use loader::{load_series, load_series_from_reader};
