use serde::Serialize;

/// Terminal failure of a single decision. `Display` is the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    #[error("Invalid personal ID code.")]
    InvalidPersonalCode,
    #[error("Loan amount must be between {min} and {max} euros.")]
    InvalidLoanAmount { min: u32, max: u32 },
    #[error("Loan period must be between {min} and {max} months.")]
    InvalidLoanPeriod { min: u32, max: u32 },
    #[error("Error parsing personal code: {0}")]
    MalformedCode(String),
    #[error("The client is too young.")]
    Underage,
    #[error("The client is older than the age limit for this loan.")]
    Overage,
    #[error("No valid loan found due to low credit score segment.")]
    NoValidLoan,
}

/// Fieldless tag for branching on a [`DecisionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecisionErrorKind {
    InvalidPersonalCode,
    InvalidLoanAmount,
    InvalidLoanPeriod,
    MalformedCode,
    Underage,
    Overage,
    NoValidLoan,
}

impl DecisionError {
    pub fn kind(&self) -> DecisionErrorKind {
        match self {
            DecisionError::InvalidPersonalCode => DecisionErrorKind::InvalidPersonalCode,
            DecisionError::InvalidLoanAmount { .. } => DecisionErrorKind::InvalidLoanAmount,
            DecisionError::InvalidLoanPeriod { .. } => DecisionErrorKind::InvalidLoanPeriod,
            DecisionError::MalformedCode(_) => DecisionErrorKind::MalformedCode,
            DecisionError::Underage => DecisionErrorKind::Underage,
            DecisionError::Overage => DecisionErrorKind::Overage,
            DecisionError::NoValidLoan => DecisionErrorKind::NoValidLoan,
        }
    }
}

impl DecisionErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionErrorKind::InvalidPersonalCode => "invalid_personal_code",
            DecisionErrorKind::InvalidLoanAmount => "invalid_loan_amount",
            DecisionErrorKind::InvalidLoanPeriod => "invalid_loan_period",
            DecisionErrorKind::MalformedCode => "malformed_code",
            DecisionErrorKind::Underage => "underage",
            DecisionErrorKind::Overage => "overage",
            DecisionErrorKind::NoValidLoan => "no_valid_loan",
        }
    }
}
