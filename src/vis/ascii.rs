//! Text-based quick look at evaluation curves.
//!
//! Provides ASCII charts of the same figures the SVG layer renders, for
//! terminal environments where no image viewer is at hand. Both
//! evaluation figures live on the unit square, so the chart fixes its
//! axes to [0, 1] and interpolates between consecutive points at cell
//! resolution.

use crate::error::Result;
use crate::metrics::{precision_recall_curve, roc_curve};

use super::backend::auc_label;
use super::{check_sets, PredictionSet};

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;

    /// Render to stdout
    fn display(&self) {
        println!("{}", self.render());
    }
}

/// Common chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Chart width in characters
    pub width: usize,
    /// Chart height in characters
    pub height: usize,
    /// Show axis labels
    pub show_labels: bool,
    /// Show legend lines under the chart
    pub show_legend: bool,
    /// Title for the chart
    pub title: Option<String>,
    /// X-axis label
    pub x_label: Option<String>,
    /// Y-axis label
    pub y_label: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 20,
            show_labels: true,
            show_legend: true,
            title: None,
            x_label: None,
            y_label: None,
        }
    }
}

/// Markers cycled across series
const MARKERS: [char; 6] = ['*', 'o', '+', 'x', '#', '@'];

/// Multi-series line chart over the unit square
#[derive(Debug, Clone, Default)]
pub struct CurveChart {
    /// Labeled point series in plotting order
    series: Vec<(String, Vec<(f64, f64)>)>,
    /// Draw the no-skill diagonal behind the series
    diagonal: bool,
    /// Configuration
    config: ChartConfig,
}

impl CurveChart {
    /// Create an empty chart with default configuration
    pub fn new() -> Self {
        Self::with_config(ChartConfig::default())
    }

    /// Create an empty chart with custom configuration
    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            series: Vec::new(),
            diagonal: false,
            config,
        }
    }

    /// Add a named series of (x, y) points in [0, 1]
    pub fn with_series(mut self, label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        self.series.push((label.into(), points));
        self
    }

    /// Draw the no-skill diagonal behind the series
    pub fn with_diagonal(mut self) -> Self {
        self.diagonal = true;
        self
    }
}

impl Chart for CurveChart {
    fn render(&self) -> String {
        if self.series.is_empty() {
            return String::from("No data to display");
        }

        let width = self.config.width;
        let height = self.config.height;

        // Create grid, row 0 at the bottom
        let mut grid = vec![vec![' '; width]; height];

        if self.diagonal {
            for col in 0..width {
                let row = col * (height - 1) / (width - 1);
                grid[row][col] = '.';
            }
        }

        for (i, (_, points)) in self.series.iter().enumerate() {
            let marker = MARKERS[i % MARKERS.len()];
            for pair in points.windows(2) {
                draw_segment(&mut grid, pair[0], pair[1], marker);
            }
            if let Some(&point) = points.last() {
                plot_cell(&mut grid, point, marker);
            }
        }

        // Render
        let mut output = String::new();

        // Title
        if let Some(ref title) = self.config.title {
            output.push_str(&format!("{:^width$}\n\n", title, width = width + 8));
        }

        // Y-axis label above the value gutter
        if self.config.show_labels {
            if let Some(ref y_label) = self.config.y_label {
                output.push_str(y_label);
                output.push('\n');
            }
        }

        for row in (0..height).rev() {
            if self.config.show_labels {
                let y_val = row as f64 / (height - 1) as f64;
                output.push_str(&format!("{:>6.2} │", y_val));
            }
            for col in 0..width {
                output.push(grid[row][col]);
            }
            output.push('\n');
        }

        // X-axis
        if self.config.show_labels {
            output.push_str("       └");
            for _ in 0..width {
                output.push('─');
            }
            output.push('\n');
            output.push_str(&format!(
                "        {:<width$.2}{:>8.2}\n",
                0.0,
                1.0,
                width = width - 8
            ));
            if let Some(ref x_label) = self.config.x_label {
                output.push_str(&format!("        {:^width$}\n", x_label, width = width));
            }
        }

        // Legend
        if self.config.show_legend {
            for (i, (label, _)) in self.series.iter().enumerate() {
                output.push_str(&format!("  {} {}\n", MARKERS[i % MARKERS.len()], label));
            }
        }

        output
    }
}

/// Map a unit-square point to a grid cell, row 0 at the bottom
fn cell(point: (f64, f64), width: usize, height: usize) -> (usize, usize) {
    let x = point.0.clamp(0.0, 1.0);
    let y = point.1.clamp(0.0, 1.0);
    let col = (x * (width - 1) as f64).round() as usize;
    let row = (y * (height - 1) as f64).round() as usize;
    (row.min(height - 1), col.min(width - 1))
}

fn plot_cell(grid: &mut [Vec<char>], point: (f64, f64), marker: char) {
    let height = grid.len();
    let width = grid[0].len();
    let (row, col) = cell(point, width, height);
    grid[row][col] = marker;
}

/// Walk a segment at cell resolution so consecutive points stay connected
fn draw_segment(grid: &mut [Vec<char>], from: (f64, f64), to: (f64, f64), marker: char) {
    let height = grid.len();
    let width = grid[0].len();
    let (r0, c0) = cell(from, width, height);
    let (r1, c1) = cell(to, width, height);
    let steps = r0.abs_diff(r1).max(c0.abs_diff(c1)).max(1);
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        plot_cell(grid, (x, y), marker);
    }
}

/// Quick sketch functions matching the SVG figures
pub mod quick {
    use super::*;

    /// Sketch the overlaid ROC figure as text, AUC per series in the
    /// legend. Same input contract as the SVG figure.
    pub fn roc(sets: &[PredictionSet]) -> Result<String> {
        check_sets(sets)?;
        let mut chart = CurveChart::with_config(ChartConfig {
            title: Some("ROC Curve".to_string()),
            x_label: Some("False Positive Rate".to_string()),
            y_label: Some("True Positive Rate (Recall)".to_string()),
            ..ChartConfig::default()
        })
        .with_diagonal();
        for set in sets {
            let curve = roc_curve(set.labels(), set.scores())?;
            chart = chart.with_series(auc_label(set.title(), curve.auc), curve.points().collect());
        }
        Ok(chart.render())
    }

    /// Sketch one precision/recall-vs-threshold panel per set, stacked
    /// vertically. Same input contract as the SVG figure.
    pub fn precision_recall(sets: &[PredictionSet]) -> Result<String> {
        check_sets(sets)?;
        let mut output = String::new();
        for set in sets {
            let curve = precision_recall_curve(set.labels(), set.scores())?;
            let chart = CurveChart::with_config(ChartConfig {
                title: Some(set.title().to_string()),
                height: 12,
                x_label: Some("Decision Threshold".to_string()),
                y_label: Some("Score".to_string()),
                ..ChartConfig::default()
            })
            .with_series("Precision", curve.precision_points().collect())
            .with_series("Recall", curve.recall_points().collect());
            output.push_str(&chart.render());
            output.push('\n');
        }
        Ok(output)
    }
}
