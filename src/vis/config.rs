//! Appearance settings for rendered figures.

/// Settings shared by the precision-recall and ROC figures.
///
/// Defaults produce an 800x600 figure with grid and legend enabled. Every
/// rendering call borrows the settings, so one value can serve many
/// figures.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    /// Draw the background mesh and axis descriptions.
    pub show_grid: bool,
    /// Draw the per-series legend.
    pub show_legend: bool,
    /// Stroke width for ROC curves.
    pub line_width: u32,
    /// RGB colors cycled across prediction sets.
    pub palette: Vec<(u8, u8, u8)>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            width: 800,
            height: 600,
            show_grid: true,
            show_legend: true,
            line_width: 2,
            palette: vec![
                (0, 123, 255),  // blue
                (255, 99, 71),  // tomato red
                (46, 204, 113), // green
            ],
        }
    }
}
