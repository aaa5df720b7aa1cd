//! Figure building for classification evaluation curves.
//!
//! Two figure builders cover the usual model-comparison views: one
//! precision/recall-vs-threshold panel per prediction set, and a single
//! chart overlaying every ROC curve with its AUC in the legend. Rendering
//! goes through plotters and is generic over the drawing backend; the
//! [`ascii`] submodule sketches the same figures as text for a terminal
//! quick look.

// Module structure
pub mod backend;
pub mod config;

// ASCII visualization (no external dependencies)
pub mod ascii;

use serde::Serialize;

use crate::error::{Error, Result};

// Re-export public items
pub use self::ascii::{Chart, ChartConfig, CurveChart};
pub use self::backend::{
    auc_label, plot_precision_recall_svg, plot_roc_svg, precision_recall_svg_string,
    render_precision_recall, render_roc, roc_svg_string,
};
pub use self::config::PlotSettings;

/// Maximum number of prediction sets a single figure accepts.
pub const MAX_SETS: usize = 3;

/// Ground truth, predicted scores and a display title for one evaluation
/// split (typically train, validation and out-of-time test).
///
/// Construction validates that labels and scores are index-aligned, so a
/// built set is always safe to hand to the curve computations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSet {
    labels: Vec<bool>,
    scores: Vec<f64>,
    title: String,
}

impl PredictionSet {
    /// Create a set from boolean ground truth, `true` marking the positive
    /// class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when the inputs disagree in
    /// length.
    pub fn new(labels: Vec<bool>, scores: Vec<f64>, title: impl Into<String>) -> Result<Self> {
        if labels.len() != scores.len() {
            return Err(Error::LengthMismatch {
                expected: labels.len(),
                actual: scores.len(),
            });
        }
        Ok(PredictionSet {
            labels,
            scores,
            title: title.into(),
        })
    }

    /// Create a set from 0/1 integer ground truth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when a label is neither 0 nor 1 and
    /// [`Error::LengthMismatch`] on misaligned inputs.
    pub fn from_binary(labels: &[u8], scores: &[f64], title: impl Into<String>) -> Result<Self> {
        let parsed = labels
            .iter()
            .map(|&value| match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(Error::InvalidInput(format!(
                    "label must be 0 or 1, got {}",
                    other
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        PredictionSet::new(parsed, scores.to_vec(), title)
    }

    /// Ground truth labels, `true` marking the positive class.
    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// Predicted scores, index-aligned with the labels.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Display title used in captions and legends.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of samples in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the set holds no samples.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Shared input contract of both figure builders: at least one set, at
/// most [`MAX_SETS`]. The over-limit case is logged at error severity
/// before it propagates; the empty case is a plain usage error and is not.
pub(crate) fn check_sets(sets: &[PredictionSet]) -> Result<()> {
    if sets.is_empty() {
        return Err(Error::NoInput);
    }
    if sets.len() > MAX_SETS {
        let err = Error::TooManySets {
            given: sets.len(),
            limit: MAX_SETS,
        };
        log::error!("{}", err);
        return Err(err);
    }
    Ok(())
}
