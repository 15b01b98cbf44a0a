use serde::{Deserialize, Serialize};

/// Raw loan application as submitted by the caller.
///
/// Amount and period are signed so out-of-range values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    #[serde(alias = "personalCode")]
    pub identification_code: String,
    #[serde(alias = "loanAmount")]
    pub amount: i64,
    #[serde(alias = "loanPeriod")]
    pub period_months: i64,
}

impl LoanRequest {
    pub fn new(identification_code: impl Into<String>, amount: i64, period_months: i64) -> Self {
        Self {
            identification_code: identification_code.into(),
            amount,
            period_months,
        }
    }
}

/// Outcome returned to the caller. Either both approved fields are set or only the
/// error message is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    #[serde(skip_serializing_if = "Option::is_none")]
    approved_amount: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    approved_period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl Decision {
    pub fn approved(amount: u32, period_months: u32) -> Self {
        Self {
            approved_amount: Some(amount),
            approved_period: Some(period_months),
            error_message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            approved_amount: None,
            approved_period: None,
            error_message: Some(message.into()),
        }
    }

    pub fn approved_amount(&self) -> Option<u32> {
        self.approved_amount
    }

    pub fn approved_period(&self) -> Option<u32> {
        self.approved_period
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_approved(&self) -> bool {
        self.approved_amount.is_some()
    }
}
