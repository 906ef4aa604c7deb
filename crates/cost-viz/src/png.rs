//! Bitmap rendering with plotters
//!
//! Draws the measured series and the fitted curve on a logarithmic x-axis
//! and writes the result as a PNG. Text is rendered through the system font
//! backend, so headless machines without fonts fail with
//! [`Error::Render`].

use crate::bounds::AxisBounds;
use crate::style::PlotStyle;
use cost_core::{Error, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Format a log-axis tick as a plain integer or in scientific notation
fn format_tick(x: f64) -> String {
    if x < 1e6 {
        format!("{:.0}", x.round())
    } else {
        format!("{:.0e}", x)
    }
}

/// Render `raw` and `fit` into a PNG at `output_path`, replacing any
/// existing file
pub fn render_png(
    output_path: &Path,
    raw: &[(f64, f64)],
    fit: &[(f64, f64)],
    style: &PlotStyle,
) -> Result<()> {
    let bounds = AxisBounds::covering(&[raw, fit])?;
    debug!(path = %output_path.display(), ?bounds, "rendering png");

    let root = BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(style.title.as_str(), ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(bounds.x.log_scale(), bounds.y)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .label_style(("sans-serif", 18))
        .x_label_formatter(&|x| format_tick(*x))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(raw.iter().copied(), &BLUE))
        .map_err(render_err)?
        .label(style.raw_name.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(fit.iter().copied(), &RED))
        .map_err(render_err)?
        .label(style.fit_name.as_str())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
