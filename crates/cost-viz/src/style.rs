//! Fixed labelling and sizing of the cost plot

/// File name of the rendered bitmap
pub const PNG_FILE_NAME: &str = "plot.png";
/// File name of the rendered interactive chart
pub const HTML_FILE_NAME: &str = "plot.html";

/// Text and dimensions shared by both output formats
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend entry for the measured series
    pub raw_name: String,
    /// Legend entry for the fitted curve
    pub fit_name: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            title: "Random insert into and delete on the avltree".to_string(),
            x_label: "Number of random inserts".to_string(),
            y_label: "Costs in XRD".to_string(),
            raw_name: "Inserts".to_string(),
            fit_name: "Fitted Line".to_string(),
            width: 1200,
            height: 800,
        }
    }
}
