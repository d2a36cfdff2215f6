use super::{Metrics, Priority, Recommendation};
use crate::scoring::features::ratio_or_zero;

/// Evaluate every rule independently, in table order. Multiple rules may
/// fire; the caller owns the final priority sort.
pub(crate) fn evaluate(metrics: &Metrics) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if metrics.payment_consistency < 70.0 {
        recommendations.push(Recommendation {
            category: "Payment Consistency",
            priority: Priority::High,
            title: "Improve Payment Timeliness",
            description: "Your payment history needs attention. Set up automatic payments to \
                          avoid missed deadlines."
                .to_string(),
            impact: "Could improve score by 30-50 points",
            actions: vec![
                "Enable auto-pay for all credit cards and loans".to_string(),
                "Set up payment reminders 3 days before due dates".to_string(),
                "Create a payment calendar for all obligations".to_string(),
            ],
        });
    } else if metrics.payment_consistency < 85.0 {
        recommendations.push(Recommendation {
            category: "Payment Consistency",
            priority: Priority::Medium,
            title: "Maintain Payment Discipline",
            description: "Good payment history! Keep it up to reach excellent status.".to_string(),
            impact: "Could improve score by 10-20 points",
            actions: vec![
                "Continue making on-time payments".to_string(),
                "Review payment schedule monthly".to_string(),
                "Build a 2-month payment buffer".to_string(),
            ],
        });
    }

    if metrics.income_reliability < 70.0 {
        recommendations.push(Recommendation {
            category: "Income Reliability",
            priority: Priority::High,
            title: "Stabilize Income Sources",
            description: "Lenders prefer consistent income. Work on building stable income \
                          streams."
                .to_string(),
            impact: "Could improve score by 25-40 points",
            actions: vec![
                "Maintain regular salary deposits in the same account".to_string(),
                "Consider side income from stable sources".to_string(),
                "Document all income sources properly".to_string(),
            ],
        });
    }

    let credit_utilization = metrics.credit_utilization_ratio;
    if credit_utilization > 30.0 {
        recommendations.push(Recommendation {
            category: "Credit Utilization",
            priority: Priority::High,
            title: "Reduce Credit Card Usage",
            description: format!(
                "Your credit utilization is {credit_utilization}%. Keep it below 30% for \
                 optimal scores."
            ),
            impact: "Could improve score by 40-60 points",
            actions: vec![
                "Pay down credit card balances aggressively".to_string(),
                "Request credit limit increases".to_string(),
                "Use debit cards for daily purchases".to_string(),
                format!(
                    "Target: Reduce utilization to below 30% (currently {credit_utilization}%)"
                ),
            ],
        });
    }

    let balance_ratio = ratio_or_zero(metrics.monthly_balance, metrics.monthly_inhand_salary);
    if balance_ratio < 0.3 {
        recommendations.push(Recommendation {
            category: "Savings Stability",
            priority: Priority::High,
            title: "Build Emergency Fund",
            description: "Your savings buffer is low. Build an emergency fund for financial \
                          security."
                .to_string(),
            impact: "Could improve score by 20-35 points",
            actions: vec![
                "Save at least 20% of monthly income".to_string(),
                "Build 3-6 months emergency fund".to_string(),
                "Open a high-yield savings account".to_string(),
                "Automate monthly transfers to savings".to_string(),
            ],
        });
    }

    let investment_ratio =
        ratio_or_zero(metrics.amount_invested_monthly, metrics.monthly_inhand_salary);
    if investment_ratio < 0.1 {
        recommendations.push(Recommendation {
            category: "Investment & Planning",
            priority: Priority::Medium,
            title: "Start Systematic Investments",
            description: "Regular investments show financial planning and discipline.".to_string(),
            impact: "Could improve score by 15-25 points",
            actions: vec![
                "Start SIP/mutual fund investments (10% of income)".to_string(),
                "Consider retirement planning accounts".to_string(),
                "Diversify investment portfolio".to_string(),
                "Review and increase investments annually".to_string(),
            ],
        });
    }

    let emi_ratio = ratio_or_zero(metrics.total_emi_per_month, metrics.monthly_inhand_salary);
    if emi_ratio > 0.4 {
        let emi_pct = emi_ratio * 100.0;
        recommendations.push(Recommendation {
            category: "Debt Management",
            priority: Priority::High,
            title: "Reduce EMI Burden",
            description: format!(
                "Your EMI to income ratio is {emi_pct:.1}%. This is high and affects your \
                 borrowing capacity."
            ),
            impact: "Could improve score by 30-45 points",
            actions: vec![
                "Consider debt consolidation at lower interest".to_string(),
                "Avoid taking new loans until ratio improves".to_string(),
                "Make extra payments towards high-interest debt".to_string(),
                format!("Target: Reduce EMI ratio below 40% (currently {emi_pct:.1}%)"),
            ],
        });
    }

    let inquiries = metrics.num_credit_inquiries;
    if inquiries > 3.0 {
        recommendations.push(Recommendation {
            category: "Credit Inquiries",
            priority: Priority::Medium,
            title: "Limit Credit Applications",
            description: format!(
                "You have {inquiries} recent credit inquiries. Too many can hurt your score."
            ),
            impact: "Could improve score by 10-20 points",
            actions: vec![
                "Avoid applying for new credit for 6 months".to_string(),
                "Pre-qualify for credit before formal applications".to_string(),
                "Space out credit applications by 3-6 months".to_string(),
                "Only apply for credit you truly need".to_string(),
            ],
        });
    }

    if metrics.current_score < 700.0 {
        recommendations.push(Recommendation {
            category: "Overall Strategy",
            priority: Priority::High,
            title: "90-Day Score Boost Plan",
            description: "Follow this strategic plan to improve your score significantly."
                .to_string(),
            impact: "Could improve score by 50-80 points in 3 months",
            actions: vec![
                "Week 1-2: Set up all automatic payments".to_string(),
                "Week 3-4: Pay down highest interest debt".to_string(),
                "Month 2: Build emergency savings to 50% of salary".to_string(),
                "Month 3: Start small monthly investments".to_string(),
                "Monitor score monthly and adjust strategy".to_string(),
            ],
        });
    }

    recommendations
}
