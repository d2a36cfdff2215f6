use serde::{Deserialize, Serialize};

use super::aggregate::{linear_score, ScoreWeights};
use super::domain::{FinancialProfile, ProfileOverrides};
use super::features::EngineeredComponents;

/// Qualitative direction of a simulated change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDirection {
    Positive,
    Negative,
    Neutral,
}

/// Per-component deltas between the modified and baseline profiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDeltas {
    pub payment: f64,
    pub income: f64,
    pub transaction: f64,
    pub savings: f64,
}

/// Outcome of a what-if simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub baseline_score: u16,
    pub modified_score: u16,
    pub score_delta: i32,
    pub percentage_change: f64,
    pub component_deltas: ComponentDeltas,
    pub direction: ScoreDirection,
    pub changes_applied: ProfileOverrides,
}

/// Recomputes the weighted/linear composite for a baseline and a modified
/// profile and reports the difference.
///
/// Deliberately stays on the rule-based path: the classifier blend applied on
/// the prediction path is not part of simulation, so deltas isolate the
/// effect of the overridden fields.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    weights: ScoreWeights,
}

impl SimulationEngine {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Simulate the overrides against the baseline. An empty override set
    /// reproduces the baseline score exactly.
    pub fn simulate(
        &self,
        baseline: &FinancialProfile,
        overrides: &ProfileOverrides,
    ) -> SimulationResult {
        let modified_profile = overrides.apply(baseline);

        let baseline_components = EngineeredComponents::from_profile(baseline);
        let modified_components = EngineeredComponents::from_profile(&modified_profile);

        let baseline_score = linear_score(self.weights.composite(&baseline_components));
        let modified_score = linear_score(self.weights.composite(&modified_components));

        let score_delta = i32::from(modified_score) - i32::from(baseline_score);
        let percentage_change = if baseline_score > 0 {
            f64::from(score_delta) / f64::from(baseline_score) * 100.0
        } else {
            0.0
        };

        let direction = if modified_score > baseline_score {
            ScoreDirection::Positive
        } else if modified_score < baseline_score {
            ScoreDirection::Negative
        } else {
            ScoreDirection::Neutral
        };

        SimulationResult {
            baseline_score,
            modified_score,
            score_delta,
            percentage_change,
            component_deltas: ComponentDeltas {
                payment: modified_components.payment_consistency
                    - baseline_components.payment_consistency,
                income: modified_components.income_reliability
                    - baseline_components.income_reliability,
                transaction: modified_components.transaction_patterns
                    - baseline_components.transaction_patterns,
                savings: modified_components.savings_stability
                    - baseline_components.savings_stability,
            },
            direction,
            changes_applied: overrides.clone(),
        }
    }
}
