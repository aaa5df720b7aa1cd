//! Evaluation metrics for scored binary classifiers.
//!
//! The threshold-sweep curves (precision-recall and ROC) and the
//! trapezoidal AUC that the figure builders in [`crate::vis`] consume.
//! All of it works on plain slices, so the module is usable without the
//! plotting layer.

pub mod classification;

// Re-export commonly used items
pub use classification::{auc, precision_recall_curve, roc_curve, PrecisionRecallCurve, RocCurve};
