//! Figure-level behavior: panel layout, legend content, input contract
//! and SVG file output.

use rocplot::{
    auc_label, plot_precision_recall_svg, plot_roc_svg, precision_recall_svg_string,
    roc_svg_string, Error, PlotSettings, PredictionSet, MAX_SETS,
};

/// Mildly imperfect set whose ROC has AUC 8/9, so its legend reads
/// "{title}: 0.8889".
fn sample_set(title: &str) -> PredictionSet {
    PredictionSet::new(
        vec![false, false, true, true, false, true],
        vec![0.1, 0.6, 0.4, 0.8, 0.3, 0.7],
        title,
    )
    .unwrap()
}

fn sample_sets(n: usize) -> Vec<PredictionSet> {
    (1..=n).map(|i| sample_set(&format!("Set {}", i))).collect()
}

#[test]
fn test_precision_recall_draws_one_panel_per_set() {
    let settings = PlotSettings::default();
    for n in 1..=MAX_SETS {
        let svg = precision_recall_svg_string(&sample_sets(n), &settings).unwrap();
        assert!(svg.contains("<svg"));
        // Every panel carries its own axis descriptions and caption.
        assert_eq!(svg.matches("Decision Threshold").count(), n);
        assert_eq!(svg.matches("Score").count(), n);
        for i in 1..=n {
            assert_eq!(svg.matches(&format!("Set {}", i)).count(), 1);
        }
        assert_eq!(svg.matches("Precision").count(), n);
        assert_eq!(svg.matches("Recall").count(), n);
    }
}

#[test]
fn test_roc_overlays_all_sets_in_one_chart() {
    let settings = PlotSettings::default();
    for n in 1..=MAX_SETS {
        let svg = roc_svg_string(&sample_sets(n), &settings).unwrap();
        assert_eq!(svg.matches("ROC Curve").count(), 1);
        assert_eq!(svg.matches("False Positive Rate").count(), 1);
        assert_eq!(svg.matches("True Positive Rate (Recall)").count(), 1);
        // One legend entry per set, AUC formatted to four decimals.
        for i in 1..=n {
            assert_eq!(svg.matches(&format!("Set {}: 0.8889", i)).count(), 1);
        }
    }
}

#[test]
fn test_legend_label_format() {
    assert_eq!(auc_label("Train", 0.8734567), "Train: 0.8735");
    assert_eq!(auc_label("Out-of-Time", 0.25), "Out-of-Time: 0.2500");
}

#[test]
fn test_no_input_is_a_usage_error() {
    let settings = PlotSettings::default();
    assert!(matches!(
        precision_recall_svg_string(&[], &settings),
        Err(Error::NoInput)
    ));
    assert!(matches!(roc_svg_string(&[], &settings), Err(Error::NoInput)));
    assert_eq!(Error::NoInput.to_string(), "no input provided");
}

#[test]
fn test_too_many_sets_is_a_validation_error() {
    let settings = PlotSettings::default();
    let sets = sample_sets(MAX_SETS + 1);

    let results = [
        precision_recall_svg_string(&sets, &settings).map(|_| ()),
        roc_svg_string(&sets, &settings).map(|_| ()),
    ];
    for result in results {
        match result {
            Err(Error::TooManySets { given, limit }) => {
                assert_eq!(given, 4);
                assert_eq!(limit, MAX_SETS);
            }
            other => panic!("expected TooManySets, got {:?}", other),
        }
    }

    let message = roc_svg_string(&sets, &settings).unwrap_err().to_string();
    assert_eq!(message, "too many sets; limit is 3");
}

#[test]
fn test_misaligned_set_fails_at_construction() {
    let result = PredictionSet::new(vec![true, false, true], vec![0.5, 0.6], "Broken");
    assert!(matches!(
        result,
        Err(Error::LengthMismatch {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_degenerate_set_rejected_before_drawing() {
    // Only one class present: curve computation refuses it.
    let one_class = PredictionSet::new(vec![true, true], vec![0.4, 0.9], "All positive").unwrap();
    let result = roc_svg_string(&[one_class], &PlotSettings::default());
    assert!(matches!(result, Err(Error::InsufficientData(_))));
}

#[test]
fn test_nan_scores_surface_as_invalid_input() {
    // Record construction only checks shape; score content is checked by
    // the metrics layer and surfaces through the figure builders.
    let set = PredictionSet::new(vec![true, false], vec![f64::NAN, 0.3], "Bad scores").unwrap();
    let result = roc_svg_string(&[set], &PlotSettings::default());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_svg_files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let settings = PlotSettings::default();
    let sets = sample_sets(2);

    let roc_path = dir.path().join("roc.svg");
    plot_roc_svg(&sets, &roc_path, &settings).unwrap();
    let contents = std::fs::read_to_string(&roc_path).unwrap();
    assert!(contents.contains("<svg"));
    assert!(contents.contains("Set 1: 0.8889"));

    let pr_path = dir.path().join("pr.svg");
    plot_precision_recall_svg(&sets, &pr_path, &settings).unwrap();
    let contents = std::fs::read_to_string(&pr_path).unwrap();
    assert!(contents.contains("<svg"));
    assert!(contents.contains("Decision Threshold"));
}

#[test]
fn test_rejected_input_leaves_no_file_behind() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("never.svg");
    let err = plot_roc_svg(&[], &path, &PlotSettings::default()).unwrap_err();
    assert!(matches!(err, Error::NoInput));
    assert!(!path.exists());

    // Degenerate data is caught before the file is created too.
    let one_class = PredictionSet::new(vec![true, true], vec![0.2, 0.9], "Pos only").unwrap();
    let path = dir.path().join("degenerate.svg");
    let err = plot_roc_svg(&[one_class], &path, &PlotSettings::default()).unwrap_err();
    assert!(matches!(err, Error::InsufficientData(_)));
    assert!(!path.exists());
}

#[test]
fn test_grid_and_legend_can_be_disabled() {
    let settings = PlotSettings {
        show_grid: false,
        show_legend: false,
        ..PlotSettings::default()
    };
    let svg = roc_svg_string(&sample_sets(1), &settings).unwrap();
    // No mesh, no axis descriptions, no legend entries.
    assert_eq!(svg.matches("False Positive Rate").count(), 0);
    assert_eq!(svg.matches("Set 1:").count(), 0);
    // The curves themselves are still drawn.
    assert!(svg.contains("<polyline"));
    assert!(svg.contains("ROC Curve"));
}

#[test]
fn test_all_tied_scores_still_render() {
    // A single distinct threshold collapses the x range; the panel must
    // still come out as a valid document.
    let tied = PredictionSet::new(
        vec![false, true, false, true],
        vec![0.5, 0.5, 0.5, 0.5],
        "Tied",
    )
    .unwrap();
    let settings = PlotSettings::default();
    let pr = precision_recall_svg_string(&[tied.clone()], &settings).unwrap();
    assert!(pr.contains("<svg"));
    let roc = roc_svg_string(&[tied], &settings).unwrap();
    assert!(roc.contains("Tied: 0.5000"));
}

#[test]
fn test_ascii_quick_look_shares_the_contract() {
    let sketch = rocplot::vis::ascii::quick::roc(&sample_sets(2)).unwrap();
    assert!(sketch.contains("ROC Curve"));
    assert!(sketch.contains("Set 1: 0.8889"));
    assert!(sketch.contains("Set 2: 0.8889"));
    assert!(matches!(
        rocplot::vis::ascii::quick::roc(&[]),
        Err(Error::NoInput)
    ));
}
