//! Interactive HTML rendering with charming

use crate::bounds::AxisBounds;
use crate::style::PlotStyle;
use charming::component::{Axis, Legend, Title};
use charming::element::{AxisType, Tooltip, Trigger};
use charming::series::Line;
use charming::{Chart, HtmlRenderer};
use cost_core::{Error, Result};
use std::path::Path;
use tracing::debug;

fn to_data(points: &[(f64, f64)]) -> Vec<Vec<f64>> {
    points.iter().map(|&(x, y)| vec![x, y]).collect()
}

/// Build the chart shown in the HTML output
pub fn build_chart(raw: &[(f64, f64)], fit: &[(f64, f64)], style: &PlotStyle) -> Chart {
    Chart::new()
        .title(Title::new().text(style.title.as_str()))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new())
        .x_axis(
            Axis::new()
                .type_(AxisType::Log)
                .name(style.x_label.as_str()),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(style.y_label.as_str()),
        )
        .series(
            Line::new()
                .name(style.raw_name.as_str())
                .show_symbol(false)
                .data(to_data(raw)),
        )
        .series(
            Line::new()
                .name(style.fit_name.as_str())
                .show_symbol(false)
                .data(to_data(fit)),
        )
}

/// Render `raw` and `fit` into a standalone HTML page at `output_path`,
/// replacing any existing file
pub fn render_html(
    output_path: &Path,
    raw: &[(f64, f64)],
    fit: &[(f64, f64)],
    style: &PlotStyle,
) -> Result<()> {
    // Reject anything the bitmap renderer would reject
    AxisBounds::covering(&[raw, fit])?;
    debug!(path = %output_path.display(), "rendering html");

    let chart = build_chart(raw, fit, style);
    HtmlRenderer::new(style.title.as_str(), style.width as u64, style.height as u64)
        .save(&chart, output_path)
        .map_err(|e| Error::Render(format!("{e:?}")))
}
