use super::common::assert_close;
use crate::scoring::recommend::{Priority, RecommendationEngine, RecommendationInput};

fn healthy_input() -> RecommendationInput {
    RecommendationInput {
        payment_consistency: Some(95.0),
        income_reliability: Some(90.0),
        transaction_patterns: Some(85.0),
        savings_stability: Some(80.0),
        current_score: Some(720.0),
        credit_utilization_ratio: Some(20.0),
        monthly_inhand_salary: Some(100_000.0),
        monthly_balance: Some(50_000.0),
        amount_invested_monthly: Some(15_000.0),
        total_emi_per_month: Some(20_000.0),
        num_credit_inquiries: Some(2.0),
    }
}

#[test]
fn healthy_metrics_produce_no_recommendations() {
    let report = RecommendationEngine::new().recommend(&healthy_input());

    assert!(report.recommendations.is_empty());
    assert_close(report.potential_score, report.current_score);
    assert_eq!(report.timeframe, "3-6 months with consistent improvements");
    assert_eq!(report.next_review, "Review progress in 30 days");
}

#[test]
fn weak_payment_history_fires_the_high_priority_rule() {
    let mut input = healthy_input();
    input.payment_consistency = Some(50.0);

    let report = RecommendationEngine::new().recommend(&input);

    assert_eq!(report.recommendations.len(), 1);
    let recommendation = &report.recommendations[0];
    assert_eq!(recommendation.category, "Payment Consistency");
    assert_eq!(recommendation.priority, Priority::High);
    assert_eq!(recommendation.title, "Improve Payment Timeliness");
    assert_close(report.potential_score, 745.0);
}

#[test]
fn decent_payment_history_fires_the_medium_rule_instead() {
    let mut input = healthy_input();
    input.payment_consistency = Some(75.0);

    let report = RecommendationEngine::new().recommend(&input);

    assert_eq!(report.recommendations.len(), 1);
    let recommendation = &report.recommendations[0];
    assert_eq!(recommendation.priority, Priority::Medium);
    assert_eq!(recommendation.title, "Maintain Payment Discipline");
    // Medium-priority findings add no potential headroom.
    assert_close(report.potential_score, 720.0);
}

#[test]
fn utilization_rule_echoes_the_live_number() {
    let mut input = healthy_input();
    input.credit_utilization_ratio = Some(45.0);

    let report = RecommendationEngine::new().recommend(&input);

    let recommendation = &report.recommendations[0];
    assert_eq!(recommendation.category, "Credit Utilization");
    assert!(recommendation.description.contains("45"));
    assert!(recommendation
        .actions
        .iter()
        .any(|action| action.contains("currently 45")));
}

#[test]
fn emi_rule_reports_the_ratio_as_a_percentage() {
    let mut input = healthy_input();
    input.total_emi_per_month = Some(50_000.0);

    let report = RecommendationEngine::new().recommend(&input);

    let recommendation = &report.recommendations[0];
    assert_eq!(recommendation.category, "Debt Management");
    assert!(recommendation.description.contains("50.0%"));
}

#[test]
fn inquiry_rule_fires_above_three() {
    let mut input = healthy_input();
    input.num_credit_inquiries = Some(5.0);

    let report = RecommendationEngine::new().recommend(&input);

    let recommendation = &report.recommendations[0];
    assert_eq!(recommendation.category, "Credit Inquiries");
    assert_eq!(recommendation.priority, Priority::Medium);
    assert!(recommendation.description.contains('5'));
}

#[test]
fn no_medium_entry_precedes_any_high_entry() {
    let mut input = healthy_input();
    input.payment_consistency = Some(75.0); // medium rule, evaluated first
    input.income_reliability = Some(50.0); // high rule, evaluated later
    input.num_credit_inquiries = Some(6.0); // medium rule, evaluated last

    let report = RecommendationEngine::new().recommend(&input);

    assert_eq!(report.recommendations.len(), 3);
    let first_medium = report
        .recommendations
        .iter()
        .position(|r| r.priority == Priority::Medium)
        .expect("medium entries present");
    let last_high = report
        .recommendations
        .iter()
        .rposition(|r| r.priority == Priority::High)
        .expect("high entry present");
    assert!(last_high < first_medium);

    // Stable sort keeps rule-evaluation order within the medium band.
    assert_eq!(report.recommendations[1].category, "Payment Consistency");
    assert_eq!(report.recommendations[2].category, "Credit Inquiries");
}

#[test]
fn defaulted_reads_drive_the_empty_input_case() {
    let report = RecommendationEngine::new().recommend(&RecommendationInput::default());

    // Defaults: components 0, score 600, salary 1 -> payment, income, savings,
    // and overall-strategy fire high; investment fires medium.
    let high_count = report
        .recommendations
        .iter()
        .filter(|r| r.priority == Priority::High)
        .count();
    assert_eq!(high_count, 4);
    assert_eq!(report.recommendations.len(), 5);
    assert_close(report.current_score, 600.0);
    assert_close(report.potential_score, 700.0);
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.category == "Overall Strategy"));
}

#[test]
fn potential_score_caps_at_the_scale_ceiling() {
    let mut input = healthy_input();
    input.current_score = Some(840.0);
    input.payment_consistency = Some(10.0);

    let report = RecommendationEngine::new().recommend(&input);

    assert_close(report.potential_score, 850.0);
}

#[test]
fn zero_salary_ratio_rules_degrade_instead_of_failing() {
    let mut input = healthy_input();
    input.monthly_inhand_salary = Some(0.0);

    let report = RecommendationEngine::new().recommend(&input);

    // balance/0 and investment/0 degrade to 0, so the savings (high) and
    // investment (medium) rules fire; emi/0 degrades to 0 and stays silent.
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.category == "Savings Stability"));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.category == "Investment & Planning"));
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.category == "Debt Management"));
}
