//! Credit-worthiness scoring engine.
//!
//! Computes a consumer credit score from a structured financial profile,
//! explains it through engineered sub-indices, simulates what-if changes, and
//! generates rule-based improvement recommendations. The statistical
//! classifier and its feature scaler are externally owned collaborators
//! injected through the traits in [`scoring::classifier`]; this crate never
//! trains, loads, or persists model artifacts.

pub mod scoring;
