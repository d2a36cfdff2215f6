use super::common::profile;
use crate::scoring::features::EngineeredComponents;
use crate::scoring::vector::{feature_vector, FEATURE_VECTOR_LEN};

#[test]
fn vector_keeps_pinned_order() {
    let profile = profile();
    let components = EngineeredComponents::from_profile(&profile);
    let vector = feature_vector(&profile, &components);

    assert_eq!(vector.len(), FEATURE_VECTOR_LEN);
    assert_eq!(vector[0], profile.age);
    assert_eq!(vector[1], profile.annual_income);
    assert_eq!(vector[15], profile.outstanding_debt);
    assert_eq!(vector[16], components.payment_consistency);
    assert_eq!(vector[19], components.savings_stability);
    assert_eq!(vector[20], components.debt_to_income);
    assert_eq!(vector[21], components.total_accounts);
}
