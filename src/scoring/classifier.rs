use serde::{Deserialize, Serialize};

use super::vector::FeatureVector;

/// Categorical prediction returned by the external model.
///
/// The label is kept as a free string at this boundary: artifacts may emit a
/// label outside the six known categories, and the aggregator handles that
/// case with a fixed fallback rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOutput {
    pub label: String,
    pub probabilities: Vec<f64>,
}

impl ClassifierOutput {
    /// Highest class probability, 0.0 for an empty distribution.
    pub fn max_probability(&self) -> f64 {
        self.probabilities.iter().copied().fold(0.0, f64::max)
    }
}

/// Externally-owned statistical classifier over scaled feature vectors.
///
/// Implementations are expected to be deterministic for a fixed artifact
/// version; the engine never retrains or persists them.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<ClassifierOutput, ClassifierError>;

    /// Version string of the loaded artifact, echoed into prediction results.
    fn model_version(&self) -> &str;
}

/// Elementwise normalizer applied before classification.
///
/// Version-pinned with the classifier: the same transform must have been
/// applied at training time.
pub trait FeatureScaler: Send + Sync {
    fn transform(&self, features: &FeatureVector) -> FeatureVector;
}

/// Failure reported by the external classifier collaborator. Never silently
/// defaulted; the caller owns retry policy.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
