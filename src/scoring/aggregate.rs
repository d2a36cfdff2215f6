use serde::{Deserialize, Serialize};

use super::classifier::ClassifierOutput;
use super::domain::ScoreCategory;
use super::features::EngineeredComponents;

/// Lower bound of the published score scale.
pub const SCORE_FLOOR: u16 = 300;
/// Upper bound of the published score scale.
pub const SCORE_CEILING: u16 = 850;

/// Divergence beyond which the linear score is averaged with the classifier
/// anchor. The averaging policy is inherited, not derived from data.
const BLEND_DIVERGENCE: u16 = 100;

/// Fixed weights for the composite index. The four weights sum to 1.0 so the
/// weighted blend of `[0, 100]` components stays on a `[0, 100]` scale before
/// rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            alpha: 0.35,
            beta: 0.25,
            gamma: 0.20,
            delta: 0.20,
        }
    }
}

impl ScoreWeights {
    /// Composite index: alpha*P + beta*I + gamma*T + delta*S on a 0-100 scale.
    pub fn composite(&self, components: &EngineeredComponents) -> f64 {
        debug_assert!(
            (self.alpha + self.beta + self.gamma + self.delta - 1.0).abs() < 1e-9,
            "score weights must sum to 1.0"
        );
        self.alpha * components.payment_consistency
            + self.beta * components.income_reliability
            + self.gamma * components.transaction_patterns
            + self.delta * components.savings_stability
    }
}

/// Rescale a 0-100 composite index onto the 300-850 scale, truncating.
pub fn linear_score(composite: f64) -> u16 {
    (f64::from(SCORE_FLOOR) + composite / 100.0 * 550.0) as u16
}

/// Representative score for a classifier label; unrecognized labels anchor at
/// the scale midpoint band.
fn label_anchor(label: &str) -> u16 {
    match label {
        "Poor" => 450,
        "Standard" => 550,
        "Fair" => 600,
        "Good" => 700,
        "Very Good" => 750,
        "Excellent" => 800,
        _ => 600,
    }
}

/// Final scoring verdict for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub final_score: u16,
    pub category: ScoreCategory,
    pub components: EngineeredComponents,
    pub weights: ScoreWeights,
    pub model_version: String,
    pub confidence: f64,
}

/// Stateless aggregator blending the rule-based composite with the
/// classifier's categorical estimate.
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    weights: ScoreWeights,
}

impl ScoreAggregator {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Combine engineered components with the classifier output into the
    /// final banded score.
    pub fn aggregate(
        &self,
        components: &EngineeredComponents,
        output: &ClassifierOutput,
        model_version: &str,
    ) -> PredictionResult {
        let linear = linear_score(self.weights.composite(components));
        let anchor = label_anchor(&output.label);

        // Cap divergence between the rule-based and learned estimates.
        let final_score = if linear.abs_diff(anchor) > BLEND_DIVERGENCE {
            (linear + anchor) / 2
        } else {
            linear
        };

        PredictionResult {
            final_score,
            category: ScoreCategory::from_score(final_score),
            components: *components,
            weights: self.weights,
            model_version: model_version.to_string(),
            confidence: output.max_probability() * 100.0,
        }
    }
}
