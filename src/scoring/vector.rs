use super::domain::FinancialProfile;
use super::features::EngineeredComponents;

/// Width of the vector consumed by the classifier and scaler: 16 raw profile
/// fields followed by 6 engineered values.
pub const FEATURE_VECTOR_LEN: usize = 22;

/// Fixed-order numeric vector handed to the external model pair.
pub type FeatureVector = [f64; FEATURE_VECTOR_LEN];

/// Assemble the feature vector in the pinned training order.
///
/// The ordering is a versioned contract with the classifier and scaler
/// artifacts. Changing it without a corresponding model retrain silently
/// corrupts every prediction, so entries must never be reordered, inserted,
/// or removed here on their own.
pub fn feature_vector(
    profile: &FinancialProfile,
    components: &EngineeredComponents,
) -> FeatureVector {
    [
        profile.age,
        profile.annual_income,
        profile.monthly_inhand_salary,
        profile.monthly_balance,
        profile.num_bank_accounts,
        profile.num_credit_card,
        profile.interest_rate,
        profile.num_of_loan,
        profile.delay_from_due_date,
        profile.num_of_delayed_payment,
        profile.num_credit_inquiries,
        profile.credit_utilization_ratio,
        profile.credit_history_age_months,
        profile.total_emi_per_month,
        profile.amount_invested_monthly,
        profile.outstanding_debt,
        components.payment_consistency,
        components.income_reliability,
        components.transaction_patterns,
        components.savings_stability,
        components.debt_to_income,
        components.total_accounts,
    ]
}
