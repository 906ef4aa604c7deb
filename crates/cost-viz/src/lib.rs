//! Rendering of cost series and their fitted curve
//!
//! Both outputs show the measured series as a connected line and the fitted
//! curve on top of it, with a logarithmic x-axis:
//!
//! - `plot.png` through [`plotters`]' bitmap backend
//! - `plot.html` through [`charming`]'s ECharts renderer
//!
//! Existing files are overwritten.

mod bounds;
mod html;
mod png;
mod style;

pub use cost_core::{Error, Result};
pub use html::{build_chart, render_html};
pub use png::render_png;
pub use style::{PlotStyle, HTML_FILE_NAME, PNG_FILE_NAME};

use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the files written by [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPlots {
    pub png: PathBuf,
    pub html: PathBuf,
}

/// Write `plot.png` and `plot.html` into `output_dir`
///
/// # Errors
///
/// * [`Error::Io`] with [`io::ErrorKind::NotFound`] if `output_dir` is not
///   an existing directory
/// * [`Error::InvalidInput`] if a point cannot be drawn on a log axis
/// * [`Error::Render`] if either backend fails
pub fn render(
    output_dir: &Path,
    raw: &[(f64, f64)],
    fit: &[(f64, f64)],
    style: &PlotStyle,
) -> Result<RenderedPlots> {
    if !output_dir.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("output directory {} does not exist", output_dir.display()),
        )));
    }

    let plots = RenderedPlots {
        png: output_dir.join(PNG_FILE_NAME),
        html: output_dir.join(HTML_FILE_NAME),
    };

    render_png(&plots.png, raw, fit, style)?;
    render_html(&plots.html, raw, fit, style)?;

    info!(png = %plots.png.display(), html = %plots.html.display(), "plots written");
    Ok(plots)
}
