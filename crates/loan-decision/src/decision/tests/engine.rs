use super::common::*;
use crate::decision::personal_code::Gender;
use crate::decision::{Decision, DecisionEngine, DecisionError, DecisionErrorKind};

#[test]
fn approves_adult_male_in_second_tier() {
    let decision = engine()
        .decide(&request(ADULT_MALE_TIER_2, 4000, 12), today())
        .expect("approved");

    assert_eq!(decision, Decision::approved(3600, 12));
    assert!(decision.is_approved());
}

#[test]
fn requested_amount_does_not_cap_the_approval() {
    let decision = engine()
        .decide(&request(ADULT_FEMALE_TIER_3, 2000, 48), today())
        .expect("approved");

    assert_eq!(decision.approved_amount(), Some(48_000));
    assert_eq!(decision.approved_period(), Some(48));
}

#[test]
fn first_tier_scales_with_period() {
    let decision = engine()
        .decide(&request(ADULT_MALE_TIER_1, 5000, 36), today())
        .expect("approved");

    assert_eq!(decision.approved_amount(), Some(3600));
}

#[test]
fn leap_day_applicant_outlives_loan_ending_the_day_before() {
    // Born 1952-02-29; expected lifetime ends 2027-09-29, the loan on 2027-09-28.
    let decision = engine()
        .decide(&request("35202299000", 4000, 12), date(2026, 9, 28))
        .expect("approved");

    assert_eq!(decision, Decision::approved(12_000, 12));
}

#[test]
fn engine_sizes_with_its_policy_tiers() {
    let mut policy = policy();
    policy.credit_tiers.tier_1_floor = 1000;

    let decision = engine()
        .with_policy(policy)
        .decide(&request(ADULT_MALE_INELIGIBLE, 4000, 24), today())
        .expect("approved");

    assert_eq!(decision.approved_amount(), Some(2400));
}

#[test]
fn amount_failure_wins_over_period_failure() {
    let error = engine()
        .decide(&request(ADULT_MALE_TIER_3, 10, 10), today())
        .unwrap_err();

    assert_eq!(error.kind(), DecisionErrorKind::InvalidLoanAmount);
}

#[test]
fn pipeline_failures_surface_by_kind() {
    let cases = [
        (BAD_CHECKSUM, DecisionErrorKind::InvalidPersonalCode),
        (IMPOSSIBLE_DATE, DecisionErrorKind::MalformedCode),
        (MINOR_MALE, DecisionErrorKind::Underage),
        (ELDERLY_FEMALE, DecisionErrorKind::Overage),
        (NINETEENTH_CENTURY_MALE, DecisionErrorKind::Overage),
        (ADULT_MALE_INELIGIBLE, DecisionErrorKind::NoValidLoan),
    ];

    for (code, kind) in cases {
        let error = engine()
            .decide(&request(code, 4000, 24), today())
            .unwrap_err();
        assert_eq!(error.kind(), kind, "{code}");
    }
}

#[test]
fn eligibility_is_checked_before_segment() {
    // Minor with an ineligible segment key still reports the age problem.
    let error = DecisionEngine::with_validator(PermissiveValidator(Some(Gender::Male)))
        .decide(&request("50806011000", 4000, 24), today())
        .unwrap_err();

    assert_eq!(error, DecisionError::Underage);
}

#[test]
fn messages_match_client_contract() {
    let engine = engine();
    let message = |code: &str| {
        engine
            .decide(&request(code, 4000, 24), today())
            .unwrap_err()
            .to_string()
    };

    assert_eq!(message(BAD_CHECKSUM), "Invalid personal ID code.");
    assert_eq!(message(MINOR_MALE), "The client is too young.");
    assert_eq!(
        message(ELDERLY_FEMALE),
        "The client is older than the age limit for this loan."
    );
    assert_eq!(
        message(ADULT_MALE_INELIGIBLE),
        "No valid loan found due to low credit score segment."
    );
}

#[test]
fn repeated_calls_are_identical() {
    let engine = engine();
    let request = request(ADULT_MALE_TIER_2, 4000, 30);

    let first = engine.decide(&request, today());
    let second = engine.decide(&request, today());

    assert_eq!(first, second);
}

#[test]
fn engine_exposes_default_policy() {
    let policy = engine().policy().clone();

    assert_eq!(policy.minimum_loan_amount, 2000);
    assert_eq!(policy.maximum_loan_period, 60);
    assert_eq!(policy.expected_lifetime(Gender::Female).years, 85);
}
