mod rules;
mod spending;

pub use spending::{
    InsightKind, SpendingAnalysis, SpendingBreakdown, SpendingHealth, SpendingInput,
    SpendingInsight, SpendingMetrics,
};

use serde::{Deserialize, Serialize};

/// Urgency rank for a recommendation. Ordering is part of the output
/// contract: the report list is stably sorted by this rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// One prioritized improvement action with its supporting steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: &'static str,
    pub priority: Priority,
    pub title: &'static str,
    pub description: String,
    pub impact: &'static str,
    pub actions: Vec<String>,
}

/// Bag of named metrics driving recommendation rules.
///
/// Absent fields fall back to documented defaults rather than erroring:
/// sub-indices, balances, EMI, investment, and inquiry counts default to 0;
/// `current_score` defaults to 600; `monthly_inhand_salary` defaults to 1 so
/// ratio rules stay well-defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInput {
    pub payment_consistency: Option<f64>,
    pub income_reliability: Option<f64>,
    pub transaction_patterns: Option<f64>,
    pub savings_stability: Option<f64>,
    pub current_score: Option<f64>,
    pub credit_utilization_ratio: Option<f64>,
    pub monthly_inhand_salary: Option<f64>,
    pub monthly_balance: Option<f64>,
    pub amount_invested_monthly: Option<f64>,
    pub total_emi_per_month: Option<f64>,
    pub num_credit_inquiries: Option<f64>,
}

/// Metrics after defaulted reads, handed to the rule table.
pub(crate) struct Metrics {
    pub payment_consistency: f64,
    pub income_reliability: f64,
    pub current_score: f64,
    pub credit_utilization_ratio: f64,
    pub monthly_inhand_salary: f64,
    pub monthly_balance: f64,
    pub amount_invested_monthly: f64,
    pub total_emi_per_month: f64,
    pub num_credit_inquiries: f64,
}

impl From<&RecommendationInput> for Metrics {
    fn from(input: &RecommendationInput) -> Self {
        Self {
            payment_consistency: input.payment_consistency.unwrap_or(0.0),
            income_reliability: input.income_reliability.unwrap_or(0.0),
            current_score: input.current_score.unwrap_or(600.0),
            credit_utilization_ratio: input.credit_utilization_ratio.unwrap_or(0.0),
            monthly_inhand_salary: input.monthly_inhand_salary.unwrap_or(1.0),
            monthly_balance: input.monthly_balance.unwrap_or(0.0),
            amount_invested_monthly: input.amount_invested_monthly.unwrap_or(0.0),
            total_emi_per_month: input.total_emi_per_month.unwrap_or(0.0),
            num_credit_inquiries: input.num_credit_inquiries.unwrap_or(0.0),
        }
    }
}

/// Prioritized improvement plan for one consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub current_score: f64,
    pub recommendations: Vec<Recommendation>,
    pub potential_score: f64,
    pub timeframe: &'static str,
    pub next_review: &'static str,
}

/// Points of estimated headroom credited per outstanding high-priority item.
const POINTS_PER_HIGH_PRIORITY: f64 = 25.0;

/// Rule-based generator of improvement recommendations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the rule table and assemble the sorted report.
    pub fn recommend(&self, input: &RecommendationInput) -> RecommendationReport {
        let metrics = Metrics::from(input);
        let mut recommendations = rules::evaluate(&metrics);

        // Stable sort keeps rule-evaluation order within equal priorities.
        recommendations.sort_by_key(|recommendation| recommendation.priority.rank());

        let high_count = recommendations
            .iter()
            .filter(|recommendation| recommendation.priority == Priority::High)
            .count();
        let potential_score = f64::from(super::aggregate::SCORE_CEILING)
            .min(metrics.current_score + POINTS_PER_HIGH_PRIORITY * high_count as f64);

        RecommendationReport {
            current_score: metrics.current_score,
            recommendations,
            potential_score,
            timeframe: "3-6 months with consistent improvements",
            next_review: "Review progress in 30 days",
        }
    }

    /// Standalone spending-health analysis over the same defaulted-read style
    /// of input.
    pub fn analyze_spending(&self, input: &SpendingInput) -> SpendingAnalysis {
        spending::analyze(input)
    }
}
