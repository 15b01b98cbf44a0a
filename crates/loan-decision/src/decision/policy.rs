use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::personal_code::Gender;
use super::sizing::CreditTiers;

pub const MINIMUM_LOAN_AMOUNT: u32 = 2000;
pub const MAXIMUM_LOAN_AMOUNT: u32 = 10000;
pub const MINIMUM_LOAN_PERIOD: u32 = 12;
pub const MAXIMUM_LOAN_PERIOD: u32 = 60;
pub const LEGAL_AGE_YEARS: u32 = 18;

const EXPECTED_LIFETIME_MEN: LifetimeSpan = LifetimeSpan {
    years: 75,
    months: 7,
};
const EXPECTED_LIFETIME_WOMEN: LifetimeSpan = LifetimeSpan {
    years: 85,
    months: 4,
};

/// Read-only underwriting bounds shared by every decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionPolicy {
    pub minimum_loan_amount: u32,
    pub maximum_loan_amount: u32,
    pub minimum_loan_period: u32,
    pub maximum_loan_period: u32,
    pub legal_age_years: u32,
    pub expected_lifetime_men: LifetimeSpan,
    pub expected_lifetime_women: LifetimeSpan,
    pub credit_tiers: CreditTiers,
}

impl DecisionPolicy {
    pub fn expected_lifetime(&self, gender: Gender) -> LifetimeSpan {
        match gender {
            Gender::Male => self.expected_lifetime_men,
            Gender::Female => self.expected_lifetime_women,
        }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            minimum_loan_amount: MINIMUM_LOAN_AMOUNT,
            maximum_loan_amount: MAXIMUM_LOAN_AMOUNT,
            minimum_loan_period: MINIMUM_LOAN_PERIOD,
            maximum_loan_period: MAXIMUM_LOAN_PERIOD,
            legal_age_years: LEGAL_AGE_YEARS,
            expected_lifetime_men: EXPECTED_LIFETIME_MEN,
            expected_lifetime_women: EXPECTED_LIFETIME_WOMEN,
            credit_tiers: CreditTiers::default(),
        }
    }
}

/// Calendar span of whole years plus months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifetimeSpan {
    pub years: u32,
    pub months: u32,
}

impl LifetimeSpan {
    pub fn total_months(&self) -> Option<u32> {
        self.years.checked_mul(12)?.checked_add(self.months)
    }

    /// Adds the whole span as one month count, clamping the day to the end of the
    /// target month only once (1952-02-29 + 75y7m is 2027-09-29).
    pub fn add_to(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(self.total_months()?))
    }
}
