//! Scoring computation engine: feature engineering, composite-index
//! aggregation, classifier blending, what-if simulation, and rule-based
//! recommendations.
//!
//! The [`service::ScoringService`] facade is the intended entry point; the
//! individual engines underneath it are pure and independently usable.

pub mod aggregate;
pub mod classifier;
pub mod domain;
pub mod features;
pub mod recommend;
pub mod service;
pub mod simulation;
pub mod vector;

#[cfg(test)]
mod tests;

pub use aggregate::{PredictionResult, ScoreAggregator, ScoreWeights, SCORE_CEILING, SCORE_FLOOR};
pub use classifier::{Classifier, ClassifierError, ClassifierOutput, FeatureScaler};
pub use domain::{FinancialProfile, MissingField, ProfileInput, ProfileOverrides, ScoreCategory};
pub use features::EngineeredComponents;
pub use recommend::{
    InsightKind, Priority, Recommendation, RecommendationEngine, RecommendationInput,
    RecommendationReport, SpendingAnalysis, SpendingBreakdown, SpendingHealth, SpendingInput,
    SpendingInsight, SpendingMetrics,
};
pub use service::{ScoringError, ScoringService};
pub use simulation::{ComponentDeltas, ScoreDirection, SimulationEngine, SimulationResult};
pub use vector::{feature_vector, FeatureVector, FEATURE_VECTOR_LEN};
