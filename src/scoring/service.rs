use std::sync::Arc;

use tracing::info;

use super::aggregate::{PredictionResult, ScoreAggregator, ScoreWeights};
use super::classifier::{Classifier, ClassifierError, FeatureScaler};
use super::domain::{FinancialProfile, MissingField, ProfileInput, ProfileOverrides};
use super::features::EngineeredComponents;
use super::recommend::{
    RecommendationEngine, RecommendationInput, RecommendationReport, SpendingAnalysis,
    SpendingInput,
};
use super::simulation::{SimulationEngine, SimulationResult};
use super::vector::feature_vector;

/// Facade composing the scoring engines over the injected classifier and
/// scaler collaborators.
///
/// Every operation is a pure, synchronous function of its inputs plus the
/// read-only artifacts; the service holds no mutable state and may be shared
/// freely across threads.
pub struct ScoringService<C, S> {
    classifier: Arc<C>,
    scaler: Arc<S>,
    aggregator: ScoreAggregator,
    simulator: SimulationEngine,
    recommender: RecommendationEngine,
}

impl<C, S> ScoringService<C, S>
where
    C: Classifier + 'static,
    S: FeatureScaler + 'static,
{
    pub fn new(classifier: Arc<C>, scaler: Arc<S>) -> Self {
        Self::with_weights(classifier, scaler, ScoreWeights::default())
    }

    pub fn with_weights(classifier: Arc<C>, scaler: Arc<S>, weights: ScoreWeights) -> Self {
        Self {
            classifier,
            scaler,
            aggregator: ScoreAggregator::new(weights),
            simulator: SimulationEngine::new(weights),
            recommender: RecommendationEngine::new(),
        }
    }

    /// Score a validated profile: engineer components, build and scale the
    /// feature vector, classify, and blend into the final banded score.
    pub fn predict(&self, profile: &FinancialProfile) -> Result<PredictionResult, ScoringError> {
        let components = EngineeredComponents::from_profile(profile);
        let raw = feature_vector(profile, &components);
        let scaled = self.scaler.transform(&raw);
        let output = self.classifier.predict(&scaled)?;

        let result = self
            .aggregator
            .aggregate(&components, &output, self.classifier.model_version());

        info!(
            score = result.final_score,
            category = result.category.label(),
            "prediction complete"
        );

        Ok(result)
    }

    /// Score a raw intake record, rejecting it if any required field is
    /// absent.
    pub fn predict_input(&self, input: ProfileInput) -> Result<PredictionResult, ScoringError> {
        let profile = FinancialProfile::from_input(input)?;
        self.predict(&profile)
    }

    /// What-if simulation on the weighted/linear path only; the classifier is
    /// not consulted, so this cannot fail.
    pub fn simulate(
        &self,
        baseline: &FinancialProfile,
        overrides: &ProfileOverrides,
    ) -> SimulationResult {
        let result = self.simulator.simulate(baseline, overrides);

        info!(
            baseline = result.baseline_score,
            modified = result.modified_score,
            delta = result.score_delta,
            "simulation complete"
        );

        result
    }

    /// Rule-based improvement plan from a defaulted-read metrics bag.
    pub fn recommend(&self, input: &RecommendationInput) -> RecommendationReport {
        let report = self.recommender.recommend(input);

        info!(
            count = report.recommendations.len(),
            potential = report.potential_score,
            "recommendations generated"
        );

        report
    }

    /// Spending-health analysis of the monthly cash-flow snapshot.
    pub fn analyze_spending(&self, input: &SpendingInput) -> SpendingAnalysis {
        let analysis = self.recommender.analyze_spending(input);

        info!(health = analysis.spending_health.label(), "spending analysis complete");

        analysis
    }
}

/// Error raised by the scoring facade.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error(transparent)]
    MissingField(#[from] MissingField),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
