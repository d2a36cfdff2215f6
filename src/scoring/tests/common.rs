use crate::scoring::domain::FinancialProfile;
use crate::scoring::features::EngineeredComponents;

/// Representative healthy profile used across the unit tests.
///
/// Engineered components for these numbers: payment 84, income 100 (clamped),
/// transaction 77, savings 50.
pub(super) fn profile() -> FinancialProfile {
    FinancialProfile {
        age: 35.0,
        annual_income: 1_200_000.0,
        monthly_inhand_salary: 100_000.0,
        monthly_balance: 50_000.0,
        num_bank_accounts: 2.0,
        num_credit_card: 3.0,
        interest_rate: 12.0,
        num_of_loan: 1.0,
        delay_from_due_date: 5.0,
        num_of_delayed_payment: 2.0,
        num_credit_inquiries: 2.0,
        credit_utilization_ratio: 25.0,
        credit_history_age_months: 120.0,
        total_emi_per_month: 15_000.0,
        amount_invested_monthly: 10_000.0,
        outstanding_debt: 200_000.0,
    }
}

pub(super) fn components(
    payment: f64,
    income: f64,
    transaction: f64,
    savings: f64,
) -> EngineeredComponents {
    EngineeredComponents {
        payment_consistency: payment,
        income_reliability: income,
        transaction_patterns: transaction,
        savings_stability: savings,
        debt_to_income: 0.2,
        total_accounts: 5.0,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
