use super::common::{assert_close, components};
use crate::scoring::aggregate::{linear_score, ScoreAggregator, ScoreWeights};
use crate::scoring::classifier::ClassifierOutput;
use crate::scoring::domain::ScoreCategory;

fn output(label: &str, probabilities: Vec<f64>) -> ClassifierOutput {
    ClassifierOutput {
        label: label.to_string(),
        probabilities,
    }
}

#[test]
fn default_weights_sum_to_one() {
    let weights = ScoreWeights::default();
    assert_close(weights.alpha + weights.beta + weights.gamma + weights.delta, 1.0);
}

#[test]
fn composite_matches_reference_example() {
    // 0.35*84 + 0.25*100 + 0.20*70 + 0.20*60 = 80.4 -> floor(300 + 442.2)
    let weighted = ScoreWeights::default().composite(&components(84.0, 100.0, 70.0, 60.0));
    assert!((weighted - 80.4).abs() < 1e-9);
    assert_eq!(linear_score(weighted), 742);
}

#[test]
fn linear_score_spans_the_published_scale() {
    assert_eq!(linear_score(0.0), 300);
    assert_eq!(linear_score(100.0), 850);
}

#[test]
fn close_classifier_label_leaves_linear_score_untouched() {
    let aggregator = ScoreAggregator::default();
    let result = aggregator.aggregate(
        &components(84.0, 100.0, 70.0, 60.0),
        &output("Good", vec![0.1, 0.8, 0.1]),
        "rf-1.0.0",
    );

    // |742 - 700| = 42, inside the divergence cap.
    assert_eq!(result.final_score, 742);
    assert_eq!(result.category, ScoreCategory::VeryGood);
    assert_eq!(result.model_version, "rf-1.0.0");
    assert_close(result.confidence, 80.0);
}

#[test]
fn divergent_classifier_label_is_averaged_in() {
    let aggregator = ScoreAggregator::default();
    let result = aggregator.aggregate(
        &components(84.0, 100.0, 70.0, 60.0),
        &output("Poor", vec![0.9, 0.1]),
        "rf-1.0.0",
    );

    // |742 - 450| = 292 -> (742 + 450) / 2 = 596
    assert_eq!(result.final_score, 596);
    assert_eq!(result.category, ScoreCategory::Poor);
}

#[test]
fn unknown_label_anchors_at_six_hundred() {
    let aggregator = ScoreAggregator::default();
    let result = aggregator.aggregate(
        &components(84.0, 100.0, 70.0, 60.0),
        &output("Galactic", vec![0.5, 0.5]),
        "rf-1.0.0",
    );

    // |742 - 600| = 142 -> (742 + 600) / 2 = 671
    assert_eq!(result.final_score, 671);
    assert_eq!(result.category, ScoreCategory::Good);
}

#[test]
fn empty_distribution_yields_zero_confidence() {
    let aggregator = ScoreAggregator::default();
    let result = aggregator.aggregate(
        &components(84.0, 100.0, 70.0, 60.0),
        &output("Good", Vec::new()),
        "rf-1.0.0",
    );

    assert_close(result.confidence, 0.0);
}

#[test]
fn banding_thresholds_are_exact() {
    assert_eq!(ScoreCategory::from_score(750), ScoreCategory::Excellent);
    assert_eq!(ScoreCategory::from_score(749), ScoreCategory::VeryGood);
    assert_eq!(ScoreCategory::from_score(700), ScoreCategory::VeryGood);
    assert_eq!(ScoreCategory::from_score(699), ScoreCategory::Good);
    assert_eq!(ScoreCategory::from_score(650), ScoreCategory::Good);
    assert_eq!(ScoreCategory::from_score(649), ScoreCategory::Fair);
    assert_eq!(ScoreCategory::from_score(600), ScoreCategory::Fair);
    assert_eq!(ScoreCategory::from_score(599), ScoreCategory::Poor);
}

#[test]
fn final_score_stays_on_scale_for_extreme_components() {
    let aggregator = ScoreAggregator::default();

    let floor = aggregator.aggregate(
        &components(0.0, 0.0, 0.0, 0.0),
        &output("Poor", vec![1.0]),
        "rf-1.0.0",
    );
    let ceiling = aggregator.aggregate(
        &components(100.0, 100.0, 100.0, 100.0),
        &output("Excellent", vec![1.0]),
        "rf-1.0.0",
    );

    assert!((300..=850).contains(&floor.final_score));
    assert!((300..=850).contains(&ceiling.final_score));
}
