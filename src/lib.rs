//! ROC and precision-recall figures for binary classifiers.
//!
//! Takes up to [`vis::MAX_SETS`] labeled prediction sets (typically
//! train, validation and out-of-time test) and renders them either as
//! one chart of overlaid ROC curves with AUC in the legend, or as
//! side-by-side precision/recall-vs-threshold panels for picking a
//! decision cutoff. Rendering goes through [plotters]; the curve math in
//! [`metrics`] works on plain slices and is usable without the plotting
//! layer.
//!
//! ```no_run
//! use rocplot::{plot_precision_recall_svg, plot_roc_svg, PlotSettings, PredictionSet};
//!
//! fn main() -> rocplot::Result<()> {
//!     let train = PredictionSet::from_binary(&[0, 0, 1, 1], &[0.1, 0.4, 0.35, 0.8], "Train")?;
//!     let valid = PredictionSet::from_binary(&[0, 1, 0, 1], &[0.2, 0.7, 0.45, 0.6], "Valid")?;
//!
//!     let settings = PlotSettings::default();
//!     plot_roc_svg(&[train.clone(), valid.clone()], "roc.svg", &settings)?;
//!     plot_precision_recall_svg(&[train, valid], "pr.svg", &settings)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod vis;

// Re-export commonly used types
pub use error::{Error, Result};
pub use metrics::{auc, precision_recall_curve, roc_curve, PrecisionRecallCurve, RocCurve};
pub use vis::{
    auc_label, plot_precision_recall_svg, plot_roc_svg, precision_recall_svg_string,
    render_precision_recall, render_roc, roc_svg_string, PlotSettings, PredictionSet, MAX_SETS,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
