//! Log2 regression plots for measured operation costs
//!
//! Loads a two-column `count,cost` CSV, fits
//! `cost = slope * log2(count) + intercept`, prints the regression report and
//! writes `plot.png` / `plot.html` next to the input.
//!
//! The individual stages live in their own crates and are re-exported here:
//!
//! - [`cost_data`]: CSV loading
//! - [`cost_regression`]: least squares fit and fitted curve
//! - [`cost_viz`]: PNG and HTML rendering
//!
//! ```rust,no_run
//! use cost_plot::{run, RunConfig};
//!
//! let report = run(&RunConfig::default()).unwrap();
//! println!("slope per doubling: {}", report.analysis.regression.slope());
//! ```

pub use cost_core::{CostSeries, Error, Result};
pub use cost_data::{load_series, load_series_from_reader};
pub use cost_regression::{
    fit_log2, fitted_curve, linear_regression, logspace, FittedCurve, LinearFit, LogRegression,
};
pub use cost_viz::{render, PlotStyle, RenderedPlots};

use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Default directory holding the input and receiving the plots
pub const DEFAULT_DIR: &str = "data";
/// Default input file name inside [`DEFAULT_DIR`]
pub const DEFAULT_PATH: &str = "insert_delete_costs.csv";

/// Where to read measurements from and how to label the plots
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory holding the input; plots are written here
    pub dir: PathBuf,
    /// Input file, relative to `dir`
    pub path: PathBuf,
    pub style: PlotStyle,
}

impl RunConfig {
    pub fn new(dir: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            path: path.into(),
            style: PlotStyle::default(),
        }
    }

    /// Location of the input CSV
    pub fn input_path(&self) -> PathBuf {
        self.dir.join(&self.path)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DIR, DEFAULT_PATH)
    }
}

/// Loaded data and everything derived from it
#[derive(Debug, Clone)]
pub struct Analysis {
    pub series: CostSeries,
    pub regression: LogRegression,
    pub curve: FittedCurve,
}

/// Outcome of a full [`run`]
#[derive(Debug, Clone)]
pub struct Report {
    pub analysis: Analysis,
    pub plots: RenderedPlots,
}

/// Load the input and fit the model without rendering anything
pub fn analyze(config: &RunConfig) -> Result<Analysis> {
    let series = load_series(config.input_path())?;
    let regression = fit_log2(series.x(), series.y())?;
    let curve = fitted_curve(&regression);
    debug!(x = ?curve.x(), "fitted curve domain");

    Ok(Analysis {
        series,
        regression,
        curve,
    })
}

/// Load, fit, print the regression report and write both plots
#[instrument(skip(config), fields(input = %config.input_path().display()))]
pub fn run(config: &RunConfig) -> Result<Report> {
    let analysis = analyze(config)?;
    info!(
        rows = analysis.series.len(),
        slope = analysis.regression.slope(),
        intercept = analysis.regression.intercept(),
        "regression fitted"
    );
    analysis.regression.print_summary();

    let raw: Vec<(f64, f64)> = analysis.series.points().collect();
    let fit: Vec<(f64, f64)> = analysis.curve.points().collect();
    let plots = render(&config.dir, &raw, &fit, &config.style)?;

    Ok(Report { analysis, plots })
}
