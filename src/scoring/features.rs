use serde::{Deserialize, Serialize};

use super::domain::FinancialProfile;

/// Derived financial-health indices recomputed on every call.
///
/// The four named sub-indices are clamped to `[0, 100]`; `debt_to_income` and
/// `total_accounts` are unconstrained auxiliary values that only feed the
/// classifier's feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineeredComponents {
    pub payment_consistency: f64,
    pub income_reliability: f64,
    pub transaction_patterns: f64,
    pub savings_stability: f64,
    pub debt_to_income: f64,
    pub total_accounts: f64,
}

/// A zero denominator degrades the ratio to 0 instead of failing. Uniform
/// policy across the engine, required for deterministic scoring.
pub(crate) fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

impl EngineeredComponents {
    /// Engineer the sub-indices from a raw profile. Total over all numeric
    /// inputs: extremes clamp, they never overflow or produce NaN.
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        let payment_consistency = (100.0
            - (profile.delay_from_due_date * 2.0 + profile.num_of_delayed_payment * 3.0))
            .clamp(0.0, 100.0);

        let monthly_expected = profile.annual_income / 12.0;
        let income_ratio = ratio_or_zero(profile.monthly_inhand_salary, monthly_expected);
        let income_reliability =
            (profile.annual_income / 100_000.0 * 50.0 + income_ratio * 50.0).clamp(0.0, 100.0);

        let emi_ratio = ratio_or_zero(profile.total_emi_per_month, profile.monthly_inhand_salary);
        let investment_ratio =
            ratio_or_zero(profile.amount_invested_monthly, profile.monthly_inhand_salary);
        let transaction_patterns = ((1.0 - emi_ratio) * 40.0
            + investment_ratio * 100.0 * 0.3
            + (50.0 - profile.num_credit_inquiries * 5.0))
            .clamp(0.0, 100.0);

        let balance_ratio = ratio_or_zero(profile.monthly_balance, profile.monthly_inhand_salary);
        let savings_stability =
            (balance_ratio * 50.0 + (50.0 - profile.credit_utilization_ratio)).clamp(0.0, 100.0);

        let debt_to_income = ratio_or_zero(profile.outstanding_debt, profile.annual_income);
        let total_accounts = profile.num_bank_accounts + profile.num_credit_card;

        Self {
            payment_consistency,
            income_reliability,
            transaction_patterns,
            savings_stability,
            debt_to_income,
            total_accounts,
        }
    }
}
