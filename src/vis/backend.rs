//! Plotters-backed figure rendering.
//!
//! The two `render_*` functions draw onto any [`DrawingArea`], so callers
//! can bring their own backend; the `plot_*_svg` and `*_svg_string`
//! wrappers cover the common cases of writing an SVG file or building an
//! SVG document in memory.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::{DashedLineSeries, LineSeries};
use plotters::style::FontTransform;

use crate::error::Result;
use crate::metrics::{precision_recall_curve, roc_curve, PrecisionRecallCurve, RocCurve};
use crate::vis::config::PlotSettings;
use crate::vis::{check_sets, PredictionSet};

/// Legend text for one ROC series.
///
/// ```
/// use rocplot::auc_label;
///
/// assert_eq!(auc_label("Train", 0.8734567), "Train: 0.8735");
/// ```
pub fn auc_label(title: &str, auc: f64) -> String {
    format!("{}: {:.4}", title, auc)
}

/// Render precision/recall-vs-threshold panels onto a drawing area, one
/// panel per prediction set, left to right in input order.
///
/// Precision is drawn dashed, recall solid; each panel carries its set's
/// title as caption and its own mesh and legend. Input validation and all
/// curve computation happen before the first draw call, so a rejected
/// input leaves the area untouched.
///
/// # Errors
///
/// Fails on an empty or over-long set slice, on degenerate set data, and
/// on any backend drawing error.
pub fn render_precision_recall<DB>(
    area: &DrawingArea<DB, Shift>,
    sets: &[PredictionSet],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let curves = precision_recall_curves(sets)?;
    draw_precision_recall(area, sets, &curves, settings)
}

/// Render every set's ROC curve into one overlaid chart on the drawing
/// area, with the no-skill diagonal and per-set AUC in the legend.
///
/// Input validation and all curve computation happen before the first
/// draw call, so a rejected input leaves the area untouched.
///
/// # Errors
///
/// Fails on an empty or over-long set slice, on degenerate set data, and
/// on any backend drawing error.
pub fn render_roc<DB>(
    area: &DrawingArea<DB, Shift>,
    sets: &[PredictionSet],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let curves = roc_curves(sets)?;
    draw_roc(area, sets, &curves, settings)
}

/// Write the precision-recall figure to an SVG file.
///
/// Validation and curve computation run before the backing file is
/// created, so a rejected input leaves no file behind.
pub fn plot_precision_recall_svg<P: AsRef<Path>>(
    sets: &[PredictionSet],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let curves = precision_recall_curves(sets)?;
    let root =
        SVGBackend::new(path.as_ref(), (settings.width, settings.height)).into_drawing_area();
    draw_precision_recall(&root, sets, &curves, settings)
}

/// Write the ROC figure to an SVG file.
///
/// Validation and curve computation run before the backing file is
/// created, so a rejected input leaves no file behind.
pub fn plot_roc_svg<P: AsRef<Path>>(
    sets: &[PredictionSet],
    path: P,
    settings: &PlotSettings,
) -> Result<()> {
    let curves = roc_curves(sets)?;
    let root =
        SVGBackend::new(path.as_ref(), (settings.width, settings.height)).into_drawing_area();
    draw_roc(&root, sets, &curves, settings)
}

/// Render the precision-recall figure into an SVG document string.
pub fn precision_recall_svg_string(
    sets: &[PredictionSet],
    settings: &PlotSettings,
) -> Result<String> {
    let curves = precision_recall_curves(sets)?;
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (settings.width, settings.height))
            .into_drawing_area();
        draw_precision_recall(&root, sets, &curves, settings)?;
    }
    Ok(buffer)
}

/// Render the ROC figure into an SVG document string.
pub fn roc_svg_string(sets: &[PredictionSet], settings: &PlotSettings) -> Result<String> {
    let curves = roc_curves(sets)?;
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (settings.width, settings.height))
            .into_drawing_area();
        draw_roc(&root, sets, &curves, settings)?;
    }
    Ok(buffer)
}

/// Shared entry check for the precision-recall figure: set count first,
/// then every curve, so no drawing target is touched on bad input.
fn precision_recall_curves(sets: &[PredictionSet]) -> Result<Vec<PrecisionRecallCurve>> {
    check_sets(sets)?;
    sets.iter()
        .map(|set| precision_recall_curve(set.labels(), set.scores()))
        .collect()
}

/// Shared entry check for the ROC figure, same ordering as above.
fn roc_curves(sets: &[PredictionSet]) -> Result<Vec<RocCurve>> {
    check_sets(sets)?;
    sets.iter()
        .map(|set| roc_curve(set.labels(), set.scores()))
        .collect()
}

fn draw_precision_recall<DB>(
    area: &DrawingArea<DB, Shift>,
    sets: &[PredictionSet],
    curves: &[PrecisionRecallCurve],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.fill(&WHITE)?;
    let panels = area.split_evenly((1, sets.len()));

    for ((set, curve), panel) in sets.iter().zip(curves.iter()).zip(panels.iter()) {
        draw_threshold_panel(panel, set, curve, settings)?;
    }

    area.present()?;
    Ok(())
}

fn draw_roc<DB>(
    area: &DrawingArea<DB, Shift>,
    sets: &[PredictionSet],
    curves: &[RocCurve],
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(area)
        .caption("ROC Curve", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.005f64..1.0f64, 0.0f64..1.005f64)?;

    if settings.show_grid {
        // 21 x labels puts a tick every 0.05 over the unit range.
        chart
            .configure_mesh()
            .x_labels(21)
            .y_labels(11)
            .x_label_style(
                ("sans-serif", 12)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .x_label_formatter(&|v| format!("{:.2}", v))
            .y_label_formatter(&|v| format!("{:.2}", v))
            .x_desc("False Positive Rate")
            .y_desc("True Positive Rate (Recall)")
            .draw()?;
    }

    let line_width = settings.line_width;
    for (i, (set, curve)) in sets.iter().zip(curves.iter()).enumerate() {
        let rgb = settings.palette[i % settings.palette.len()];
        let color = RGBColor(rgb.0, rgb.1, rgb.2);
        let points: Vec<(f64, f64)> = curve.points().collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(line_width)))?
            .label(auc_label(set.title(), curve.auc))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(line_width))
            });
    }

    // No-skill diagonal; deliberately unlabeled so it stays out of the legend.
    chart.draw_series(DashedLineSeries::new(
        vec![(0.0, 0.0), (1.0, 1.0)],
        5,
        5,
        BLACK.stroke_width(1),
    ))?;

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::LowerRight)
            .draw()?;
    }

    area.present()?;
    Ok(())
}

fn draw_threshold_panel<DB>(
    panel: &DrawingArea<DB, Shift>,
    set: &PredictionSet,
    curve: &PrecisionRecallCurve,
    settings: &PlotSettings,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = threshold_range(&curve.thresholds);

    let mut chart = ChartBuilder::on(panel)
        .caption(set.title(), ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, 0.0f64..1.05f64)?;

    if settings.show_grid {
        chart
            .configure_mesh()
            .x_labels(6)
            .y_labels(6)
            .x_label_formatter(&|v| format!("{:.2}", v))
            .y_label_formatter(&|v| format!("{:.2}", v))
            .x_desc("Decision Threshold")
            .y_desc("Score")
            .draw()?;
    }

    let precision: Vec<(f64, f64)> = curve.precision_points().collect();
    chart
        .draw_series(DashedLineSeries::new(precision, 4, 3, BLUE.stroke_width(1)))?
        .label("Precision")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    let recall: Vec<(f64, f64)> = curve.recall_points().collect();
    chart
        .draw_series(LineSeries::new(recall, GREEN.stroke_width(1)))?
        .label("Recall")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    if settings.show_legend {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperRight)
            .draw()?;
    }

    Ok(())
}

/// X-axis range over one panel's thresholds, widened when every score is
/// identical and the span would otherwise be zero.
fn threshold_range(thresholds: &[f64]) -> (f64, f64) {
    let min = thresholds.first().copied().unwrap_or(0.0);
    let max = thresholds.last().copied().unwrap_or(1.0);
    if (max - min).abs() < f64::EPSILON {
        (min - 0.05, max + 0.05)
    } else {
        (min, max)
    }
}
