//! Axis ranges covering every series on the chart

use cost_core::{Error, Result};
use std::ops::Range;

/// Fraction of the y span added above and below the data
const Y_PADDING: f64 = 0.05;

/// Axis ranges for a log-x / linear-y chart
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisBounds {
    pub(crate) x: Range<f64>,
    pub(crate) y: Range<f64>,
}

impl AxisBounds {
    /// Compute ranges that contain all points of all `series`
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidInput`] if there are no points, or an `x` is not a
    ///   positive finite number (it cannot sit on a log axis)
    /// * [`Error::Computation`] if a `y` is not finite
    pub(crate) fn covering(series: &[&[(f64, f64)]]) -> Result<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;

        for &(x, y) in series.iter().flat_map(|s| s.iter()) {
            if !(x.is_finite() && x > 0.0) {
                return Err(Error::InvalidInput(format!(
                    "x = {x} cannot be placed on a logarithmic axis"
                )));
            }
            if !y.is_finite() {
                return Err(Error::non_finite("plot y values"));
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }

        if x_min > x_max {
            return Err(Error::InvalidInput("nothing to plot".to_string()));
        }

        if x_min == x_max {
            x_max = x_min * 10.0;
        }

        let span = y_max - y_min;
        let pad = if span > 0.0 {
            span * Y_PADDING
        } else {
            y_min.abs().max(1.0) * Y_PADDING
        };

        Ok(Self {
            x: x_min..x_max,
            y: (y_min - pad)..(y_max + pad),
        })
    }
}
