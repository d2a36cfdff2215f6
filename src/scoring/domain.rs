use serde::{Deserialize, Serialize};

/// Fully-populated financial profile used on the prediction path.
///
/// Every field is required: scoring a profile with a hole in it would silently
/// shift the feature vector handed to the classifier, so intake goes through
/// [`ProfileInput`] and [`FinancialProfile::from_input`] instead of defaulting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub age: f64,
    pub annual_income: f64,
    pub monthly_inhand_salary: f64,
    pub monthly_balance: f64,
    pub num_bank_accounts: f64,
    pub num_credit_card: f64,
    pub interest_rate: f64,
    pub num_of_loan: f64,
    pub delay_from_due_date: f64,
    pub num_of_delayed_payment: f64,
    pub num_credit_inquiries: f64,
    pub credit_utilization_ratio: f64,
    pub credit_history_age_months: f64,
    pub total_emi_per_month: f64,
    pub amount_invested_monthly: f64,
    pub outstanding_debt: f64,
}

/// Loosely-populated intake record accepted from callers.
///
/// Mirrors [`FinancialProfile`] field for field with everything optional so
/// requests can be deserialized without failing, then validated explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub age: Option<f64>,
    pub annual_income: Option<f64>,
    pub monthly_inhand_salary: Option<f64>,
    pub monthly_balance: Option<f64>,
    pub num_bank_accounts: Option<f64>,
    pub num_credit_card: Option<f64>,
    pub interest_rate: Option<f64>,
    pub num_of_loan: Option<f64>,
    pub delay_from_due_date: Option<f64>,
    pub num_of_delayed_payment: Option<f64>,
    pub num_credit_inquiries: Option<f64>,
    pub credit_utilization_ratio: Option<f64>,
    pub credit_history_age_months: Option<f64>,
    pub total_emi_per_month: Option<f64>,
    pub amount_invested_monthly: Option<f64>,
    pub outstanding_debt: Option<f64>,
}

/// A required scoring field was absent from the intake record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required field `{0}`")]
pub struct MissingField(pub &'static str);

fn require(value: Option<f64>, field: &'static str) -> Result<f64, MissingField> {
    value.ok_or(MissingField(field))
}

impl FinancialProfile {
    /// Validate an intake record into a scoring-ready profile.
    ///
    /// Fails on the first absent field, reported under its wire name.
    pub fn from_input(input: ProfileInput) -> Result<Self, MissingField> {
        Ok(Self {
            age: require(input.age, "age")?,
            annual_income: require(input.annual_income, "annualIncome")?,
            monthly_inhand_salary: require(input.monthly_inhand_salary, "monthlyInhandSalary")?,
            monthly_balance: require(input.monthly_balance, "monthlyBalance")?,
            num_bank_accounts: require(input.num_bank_accounts, "numBankAccounts")?,
            num_credit_card: require(input.num_credit_card, "numCreditCard")?,
            interest_rate: require(input.interest_rate, "interestRate")?,
            num_of_loan: require(input.num_of_loan, "numOfLoan")?,
            delay_from_due_date: require(input.delay_from_due_date, "delayFromDueDate")?,
            num_of_delayed_payment: require(
                input.num_of_delayed_payment,
                "numOfDelayedPayment",
            )?,
            num_credit_inquiries: require(input.num_credit_inquiries, "numCreditInquiries")?,
            credit_utilization_ratio: require(
                input.credit_utilization_ratio,
                "creditUtilizationRatio",
            )?,
            credit_history_age_months: require(
                input.credit_history_age_months,
                "creditHistoryAgeMonths",
            )?,
            total_emi_per_month: require(input.total_emi_per_month, "totalEmiPerMonth")?,
            amount_invested_monthly: require(
                input.amount_invested_monthly,
                "amountInvestedMonthly",
            )?,
            outstanding_debt: require(input.outstanding_debt, "outstandingDebt")?,
        })
    }
}

/// Partial set of field overrides for what-if simulation.
///
/// Merge semantics are additive: `None` keeps the baseline value, and unknown
/// fields in a serialized payload are dropped during deserialization rather
/// than rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileOverrides {
    pub age: Option<f64>,
    pub annual_income: Option<f64>,
    pub monthly_inhand_salary: Option<f64>,
    pub monthly_balance: Option<f64>,
    pub num_bank_accounts: Option<f64>,
    pub num_credit_card: Option<f64>,
    pub interest_rate: Option<f64>,
    pub num_of_loan: Option<f64>,
    pub delay_from_due_date: Option<f64>,
    pub num_of_delayed_payment: Option<f64>,
    pub num_credit_inquiries: Option<f64>,
    pub credit_utilization_ratio: Option<f64>,
    pub credit_history_age_months: Option<f64>,
    pub total_emi_per_month: Option<f64>,
    pub amount_invested_monthly: Option<f64>,
    pub outstanding_debt: Option<f64>,
}

impl ProfileOverrides {
    /// Apply the overrides to a baseline profile, last-write-wins per field.
    pub fn apply(&self, baseline: &FinancialProfile) -> FinancialProfile {
        FinancialProfile {
            age: self.age.unwrap_or(baseline.age),
            annual_income: self.annual_income.unwrap_or(baseline.annual_income),
            monthly_inhand_salary: self
                .monthly_inhand_salary
                .unwrap_or(baseline.monthly_inhand_salary),
            monthly_balance: self.monthly_balance.unwrap_or(baseline.monthly_balance),
            num_bank_accounts: self.num_bank_accounts.unwrap_or(baseline.num_bank_accounts),
            num_credit_card: self.num_credit_card.unwrap_or(baseline.num_credit_card),
            interest_rate: self.interest_rate.unwrap_or(baseline.interest_rate),
            num_of_loan: self.num_of_loan.unwrap_or(baseline.num_of_loan),
            delay_from_due_date: self
                .delay_from_due_date
                .unwrap_or(baseline.delay_from_due_date),
            num_of_delayed_payment: self
                .num_of_delayed_payment
                .unwrap_or(baseline.num_of_delayed_payment),
            num_credit_inquiries: self
                .num_credit_inquiries
                .unwrap_or(baseline.num_credit_inquiries),
            credit_utilization_ratio: self
                .credit_utilization_ratio
                .unwrap_or(baseline.credit_utilization_ratio),
            credit_history_age_months: self
                .credit_history_age_months
                .unwrap_or(baseline.credit_history_age_months),
            total_emi_per_month: self
                .total_emi_per_month
                .unwrap_or(baseline.total_emi_per_month),
            amount_invested_monthly: self
                .amount_invested_monthly
                .unwrap_or(baseline.amount_invested_monthly),
            outstanding_debt: self.outstanding_debt.unwrap_or(baseline.outstanding_debt),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Discrete band assigned to a final score.
///
/// Deliberately distinct from the classifier's own label set: banding here is
/// derived from the blended numeric score, not from the model's prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

impl ScoreCategory {
    /// Band a final score on the 300-850 scale.
    pub fn from_score(score: u16) -> Self {
        if score >= 750 {
            Self::Excellent
        } else if score >= 700 {
            Self::VeryGood
        } else if score >= 650 {
            Self::Good
        } else if score >= 600 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}
