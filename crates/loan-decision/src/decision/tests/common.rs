use chrono::NaiveDate;

use crate::decision::decoder::DecodedIdentity;
use crate::decision::personal_code::{Gender, PersonalCodeValidator};
use crate::decision::{DecisionEngine, DecisionPolicy, LoanRequest};

/// Male, born 1985-01-01, segment key 5509.
pub(super) const ADULT_MALE_TIER_2: &str = "38501015509";
/// Male, born 1985-01-04, segment key 9999.
pub(super) const ADULT_MALE_TIER_3: &str = "38501049999";
/// Male, born 1985-01-01, segment key 3004.
pub(super) const ADULT_MALE_TIER_1: &str = "38501013004";
/// Male, born 1985-01-01, segment key 1006.
pub(super) const ADULT_MALE_INELIGIBLE: &str = "38501011006";
/// Female, born 1990-02-01, segment key 8004.
pub(super) const ADULT_FEMALE_TIER_3: &str = "49002018004";
/// Male, born 2008-06-01.
pub(super) const MINOR_MALE: &str = "50806016004";
/// Female, born 1940-01-01, segment key 7003.
pub(super) const ELDERLY_FEMALE: &str = "44001017003";
/// Male, born 1890-01-01.
pub(super) const NINETEENTH_CENTURY_MALE: &str = "19001019004";
/// Checksum passes but encodes 1990-02-30.
pub(super) const IMPOSSIBLE_DATE: &str = "39002307006";
/// Same digits as `ADULT_MALE_TIER_2` with a wrong check digit.
pub(super) const BAD_CHECKSUM: &str = "38501015500";

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new()
}

pub(super) fn policy() -> DecisionPolicy {
    DecisionPolicy::default()
}

pub(super) fn request(code: &str, amount: i64, period_months: i64) -> LoanRequest {
    LoanRequest::new(code, amount, period_months)
}

pub(super) fn identity(birth_date: NaiveDate, gender: Gender) -> DecodedIdentity {
    DecodedIdentity {
        birth_date,
        gender,
        segment_key: 9000,
    }
}

/// Accepts any input and reports a fixed gender.
pub(super) struct PermissiveValidator(pub Option<Gender>);

impl PersonalCodeValidator for PermissiveValidator {
    fn is_valid(&self, _code: &str) -> bool {
        true
    }

    fn gender(&self, _code: &str) -> Option<Gender> {
        self.0
    }
}
