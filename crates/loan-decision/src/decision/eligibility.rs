use chrono::{Months, NaiveDate};

use super::decoder::DecodedIdentity;
use super::error::DecisionError;
use super::policy::DecisionPolicy;

/// Rejects applicants below legal age or whose expected lifetime does not extend past
/// the end of the loan. Returns the applicant's age in whole years.
pub(crate) fn evaluate(
    identity: &DecodedIdentity,
    period_months: u32,
    today: NaiveDate,
    policy: &DecisionPolicy,
) -> Result<u32, DecisionError> {
    let age_years = today.years_since(identity.birth_date).unwrap_or(0);
    if age_years < policy.legal_age_years {
        return Err(DecisionError::Underage);
    }

    // A loan ending past the representable calendar cannot be outlived.
    let Some(loan_end) = today.checked_add_months(Months::new(period_months)) else {
        return Err(DecisionError::Overage);
    };

    let outlives_loan = policy
        .expected_lifetime(identity.gender)
        .add_to(identity.birth_date)
        .map_or(true, |lifetime_end| lifetime_end > loan_end);

    if !outlives_loan {
        return Err(DecisionError::Overage);
    }

    Ok(age_years)
}
