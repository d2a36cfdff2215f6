use serde::{Deserialize, Serialize};

use crate::scoring::features::ratio_or_zero;

/// Monthly cash-flow snapshot for spending analysis.
///
/// Defaulted reads: `monthly_inhand_salary` falls back to 1, everything else
/// to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInput {
    pub monthly_inhand_salary: Option<f64>,
    pub monthly_balance: Option<f64>,
    pub total_emi_per_month: Option<f64>,
    pub amount_invested_monthly: Option<f64>,
}

/// Band classification of the spending rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpendingHealth {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl SpendingHealth {
    fn from_spending_rate(rate: f64) -> Self {
        if rate < 50.0 {
            Self::Excellent
        } else if rate < 70.0 {
            Self::Good
        } else if rate < 85.0 {
            Self::Fair
        } else {
            Self::NeedsAttention
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }

    /// Display hint carried through for front-end badges.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "success",
            Self::Good => "info",
            Self::Fair => "warning",
            Self::NeedsAttention => "danger",
        }
    }
}

/// Percentage ratios of the salary, rounded to one decimal for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingMetrics {
    pub emi_ratio: f64,
    pub savings_rate: f64,
    pub investment_rate: f64,
    pub spending_rate: f64,
}

/// Absolute monthly amounts behind the ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingBreakdown {
    pub income: f64,
    pub emi: f64,
    pub investments: f64,
    pub savings: f64,
    pub estimated_spending: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Success,
    Info,
}

/// Threshold-triggered observation about one spending metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingInsight {
    pub kind: InsightKind,
    pub title: &'static str,
    pub message: String,
}

/// Full spending-health report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingAnalysis {
    pub spending_health: SpendingHealth,
    pub health_color: &'static str,
    pub metrics: SpendingMetrics,
    pub breakdown: SpendingBreakdown,
    pub insights: Vec<SpendingInsight>,
    pub recommendations: Vec<&'static str>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(super) fn analyze(input: &SpendingInput) -> SpendingAnalysis {
    let salary = input.monthly_inhand_salary.unwrap_or(1.0);
    let balance = input.monthly_balance.unwrap_or(0.0);
    let emi = input.total_emi_per_month.unwrap_or(0.0);
    let investments = input.amount_invested_monthly.unwrap_or(0.0);

    let estimated_spending = salary - balance - investments;
    let emi_ratio = ratio_or_zero(emi, salary) * 100.0;
    let savings_rate = ratio_or_zero(balance, salary) * 100.0;
    let investment_rate = ratio_or_zero(investments, salary) * 100.0;
    let spending_rate = ratio_or_zero(estimated_spending, salary) * 100.0;

    // Banding uses the unrounded rate; rounding is display-only.
    let spending_health = SpendingHealth::from_spending_rate(spending_rate);

    let mut insights = Vec::new();

    if emi_ratio > 40.0 {
        insights.push(SpendingInsight {
            kind: InsightKind::Warning,
            title: "High Debt Burden",
            message: format!("EMI consumes {emi_ratio:.1}% of income. Recommended: below 40%"),
        });
    }

    if savings_rate < 20.0 {
        insights.push(SpendingInsight {
            kind: InsightKind::Warning,
            title: "Low Savings Rate",
            message: format!("Saving only {savings_rate:.1}% of income. Target: 20-30%"),
        });
    } else {
        insights.push(SpendingInsight {
            kind: InsightKind::Success,
            title: "Good Savings Habit",
            message: format!("Great! You're saving {savings_rate:.1}% of income"),
        });
    }

    if investment_rate < 10.0 {
        insights.push(SpendingInsight {
            kind: InsightKind::Info,
            title: "Investment Opportunity",
            message: "Consider investing 10-15% of income for long-term wealth".to_string(),
        });
    }

    SpendingAnalysis {
        spending_health,
        health_color: spending_health.color(),
        metrics: SpendingMetrics {
            emi_ratio: round1(emi_ratio),
            savings_rate: round1(savings_rate),
            investment_rate: round1(investment_rate),
            spending_rate: round1(spending_rate),
        },
        breakdown: SpendingBreakdown {
            income: salary,
            emi,
            investments,
            savings: balance,
            estimated_spending,
        },
        insights,
        recommendations: vec![
            "Track expenses using a budgeting app",
            "Follow 50/30/20 rule: 50% needs, 30% wants, 20% savings",
            "Review subscriptions and cut unused services",
            "Set spending alerts on credit cards",
        ],
    }
}
