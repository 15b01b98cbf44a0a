//! Loan decision pipeline.
//!
//! Every request runs the same four steps in order: input validation, personal code
//! decoding, age and expected-lifetime eligibility, and loan sizing. The first failing
//! step ends the request with a [`DecisionError`]; nothing is retained between calls.

mod decoder;
pub mod domain;
mod eligibility;
mod error;
pub mod personal_code;
mod policy;
mod sizing;
mod validation;

#[cfg(test)]
mod tests;

pub use decoder::DecodedIdentity;
pub use domain::{Decision, LoanRequest};
pub use error::{DecisionError, DecisionErrorKind};
pub use personal_code::{EstonianCodeValidator, Gender, PersonalCodeValidator};
pub use policy::{DecisionPolicy, LifetimeSpan};
pub use sizing::{CreditSegment, CreditTiers};
pub use validation::ValidatedRequest;

use chrono::NaiveDate;
use tracing::debug;

/// Stateless engine turning a loan request into a decision.
///
/// The engine only holds immutable policy and a stateless code validator, so a single
/// instance can be shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct DecisionEngine<V = EstonianCodeValidator> {
    validator: V,
    policy: DecisionPolicy,
}

impl DecisionEngine<EstonianCodeValidator> {
    pub fn new() -> Self {
        Self::with_validator(EstonianCodeValidator)
    }
}

impl Default for DecisionEngine<EstonianCodeValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DecisionEngine<V>
where
    V: PersonalCodeValidator,
{
    pub fn with_validator(validator: V) -> Self {
        Self {
            validator,
            policy: DecisionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DecisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    /// Run the full pipeline for `request` as of `today`.
    ///
    /// `today` is read once by the caller so age and loan-end comparisons within a
    /// single decision always agree.
    pub fn decide(
        &self,
        request: &LoanRequest,
        today: NaiveDate,
    ) -> Result<Decision, DecisionError> {
        let validated = validation::validate(request, &self.validator, &self.policy)?;

        let identity = decoder::decode(validated.personal_code, &self.validator)?;
        debug!(
            segment_key = identity.segment_key,
            gender = ?identity.gender,
            "personal code decoded"
        );

        let age_years =
            eligibility::evaluate(&identity, validated.period_months, today, &self.policy)?;
        debug!(age_years, "applicant within age and lifetime limits");

        sizing::size_loan(
            identity.segment_key,
            validated.period_months,
            &self.policy.credit_tiers,
        )
    }
}
