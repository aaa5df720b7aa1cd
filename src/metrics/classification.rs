//! Threshold-sweep metrics for binary classification.
//!
//! Ground truth is a `&[bool]` slice (`true` marks the positive class)
//! paired with an index-aligned `&[f64]` score slice. A sample counts as
//! predicted positive when its score is at or above the decision
//! threshold, and tied scores collapse into a single threshold point, so
//! every curve has one point per distinct score value.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::{Error, Result};

/// Precision and recall at every distinct decision threshold.
///
/// `thresholds` is ascending with length `n`. `precisions` and `recalls`
/// have length `n + 1`: the trailing element is the (precision 1, recall 0)
/// anchor that closes the curve, so zipping either array with `thresholds`
/// yields exactly the plottable points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionRecallCurve {
    /// Precision at each threshold, plus the trailing anchor value 1.0.
    pub precisions: Vec<f64>,
    /// Recall at each threshold, plus the trailing anchor value 0.0.
    pub recalls: Vec<f64>,
    /// Distinct decision thresholds, ascending.
    pub thresholds: Vec<f64>,
}

impl PrecisionRecallCurve {
    /// (threshold, precision) pairs, without the trailing anchor.
    pub fn precision_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.thresholds
            .iter()
            .copied()
            .zip(self.precisions.iter().copied())
    }

    /// (threshold, recall) pairs, without the trailing anchor.
    pub fn recall_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.thresholds
            .iter()
            .copied()
            .zip(self.recalls.iter().copied())
    }

    /// Number of distinct thresholds.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// True when the curve holds no threshold points.
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Serialize the curve to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }
}

/// ROC curve together with its area.
///
/// The arrays are index-aligned. `fpr` ascends from 0.0 to 1.0 and the
/// first point is the (0, 0) origin at threshold `+inf`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    /// False positive rate at each threshold.
    pub fpr: Vec<f64>,
    /// True positive rate at each threshold.
    pub tpr: Vec<f64>,
    /// Decision thresholds, descending, starting at `+inf`.
    pub thresholds: Vec<f64>,
    /// Area under the curve by the trapezoidal rule.
    pub auc: f64,
}

impl RocCurve {
    /// (fpr, tpr) pairs in plotting order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fpr.iter().copied().zip(self.tpr.iter().copied())
    }

    /// Number of curve points, the origin included.
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    /// True when the curve holds no points.
    pub fn is_empty(&self) -> bool {
        self.fpr.is_empty()
    }

    /// Serialize the curve to a JSON string.
    ///
    /// The leading `+inf` threshold is not representable in JSON and
    /// serializes as `null`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }
}

/// Compute the precision-recall curve over every distinct score threshold.
///
/// Thresholds come back ascending; the precision and recall arrays carry
/// the closing (1, 0) anchor described on [`PrecisionRecallCurve`].
///
/// # Errors
///
/// Fails when the slices are empty, when their lengths differ, when a
/// score is not finite, or when no sample is labeled positive (recall has
/// no denominator).
pub fn precision_recall_curve(labels: &[bool], scores: &[f64]) -> Result<PrecisionRecallCurve> {
    validate_pair(labels, scores)?;

    let positives = labels.iter().filter(|&&label| label).count();
    if positives == 0 {
        return Err(Error::InsufficientData(
            "no positive samples in ground truth".to_string(),
        ));
    }

    let order = descending_score_order(scores);

    let mut thresholds = Vec::new();
    let mut precisions = Vec::new();
    let mut recalls = Vec::new();

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        thresholds.push(threshold);
        precisions.push(tp as f64 / (tp + fp) as f64);
        recalls.push(tp as f64 / positives as f64);
    }

    // Flip the sweep to ascending threshold order, then close the curve.
    thresholds.reverse();
    precisions.reverse();
    recalls.reverse();
    precisions.push(1.0);
    recalls.push(0.0);

    Ok(PrecisionRecallCurve {
        precisions,
        recalls,
        thresholds,
    })
}

/// Compute the ROC curve and its AUC over every distinct score threshold.
///
/// The curve starts at the (0, 0) origin (threshold `+inf`) and ends at
/// (1, 1).
///
/// # Errors
///
/// Fails when the slices are empty, when their lengths differ, when a
/// score is not finite, or when either class is absent (both rates need a
/// populated denominator).
pub fn roc_curve(labels: &[bool], scores: &[f64]) -> Result<RocCurve> {
    validate_pair(labels, scores)?;

    let positives = labels.iter().filter(|&&label| label).count();
    let negatives = labels.len() - positives;
    if positives == 0 {
        return Err(Error::InsufficientData(
            "no positive samples in ground truth".to_string(),
        ));
    }
    if negatives == 0 {
        return Err(Error::InsufficientData(
            "no negative samples in ground truth".to_string(),
        ));
    }

    let order = descending_score_order(scores);

    let mut fpr = vec![0.0];
    let mut tpr = vec![0.0];
    let mut thresholds = vec![f64::INFINITY];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < order.len() {
        let threshold = scores[order[i]];
        while i < order.len() && scores[order[i]] == threshold {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        fpr.push(fp as f64 / negatives as f64);
        tpr.push(tp as f64 / positives as f64);
        thresholds.push(threshold);
    }

    let auc = auc(&fpr, &tpr)?;

    Ok(RocCurve {
        fpr,
        tpr,
        thresholds,
        auc,
    })
}

/// Trapezoidal area under a curve given as parallel coordinate slices.
///
/// Pairs are sorted by ascending x before integration, so callers may pass
/// points in any order.
///
/// # Errors
///
/// Fails when the slices differ in length or hold fewer than two points.
pub fn auc(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData(format!(
            "at least two points are required to integrate, got {}",
            x.len()
        )));
    }

    let mut points: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let mut area = 0.0;
    for pair in points.windows(2) {
        area += (pair[1].0 - pair[0].0) * (pair[1].1 + pair[0].1) / 2.0;
    }
    Ok(area)
}

/// Indices of `scores` sorted by descending score.
fn descending_score_order(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    order
}

/// Shared validation for label/score input pairs: aligned lengths, at
/// least one sample, finite scores.
fn validate_pair(labels: &[bool], scores: &[f64]) -> Result<()> {
    if labels.len() != scores.len() {
        return Err(Error::LengthMismatch {
            expected: labels.len(),
            actual: scores.len(),
        });
    }
    if labels.is_empty() {
        return Err(Error::Empty("no samples to evaluate".to_string()));
    }
    // The tie-grouping sweep relies on scores comparing equal to
    // themselves, which NaN does not.
    if let Some(position) = scores.iter().position(|score| !score.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "score at index {} is not finite",
            position
        )));
    }
    Ok(())
}
