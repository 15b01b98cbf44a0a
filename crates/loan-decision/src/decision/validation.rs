use super::domain::LoanRequest;
use super::error::DecisionError;
use super::personal_code::PersonalCodeValidator;
use super::policy::DecisionPolicy;

/// Request that passed every bounds and format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedRequest<'a> {
    pub personal_code: &'a str,
    pub amount: u32,
    pub period_months: u32,
}

/// Checks the code, then the amount, then the period; the first violation wins.
pub(crate) fn validate<'a, V>(
    request: &'a LoanRequest,
    validator: &V,
    policy: &DecisionPolicy,
) -> Result<ValidatedRequest<'a>, DecisionError>
where
    V: PersonalCodeValidator + ?Sized,
{
    if !validator.is_valid(&request.identification_code) {
        return Err(DecisionError::InvalidPersonalCode);
    }

    let amount = within(
        request.amount,
        policy.minimum_loan_amount,
        policy.maximum_loan_amount,
    )
    .ok_or(DecisionError::InvalidLoanAmount {
        min: policy.minimum_loan_amount,
        max: policy.maximum_loan_amount,
    })?;

    let period_months = within(
        request.period_months,
        policy.minimum_loan_period,
        policy.maximum_loan_period,
    )
    .ok_or(DecisionError::InvalidLoanPeriod {
        min: policy.minimum_loan_period,
        max: policy.maximum_loan_period,
    })?;

    Ok(ValidatedRequest {
        personal_code: &request.identification_code,
        amount,
        period_months,
    })
}

fn within(value: i64, min: u32, max: u32) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .filter(|value| (min..=max).contains(value))
}
