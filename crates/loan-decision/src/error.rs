use crate::config::ConfigError;
use crate::decision::{Decision, DecisionError, DecisionErrorKind};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;

/// Application-level failure, surfaced to HTTP clients or the CLI.
#[derive(Debug)]
pub enum AppError {
    Decision(DecisionError),
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Decision(err) => write!(f, "decision declined: {}", err),
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Decision(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Decision(err) => {
                let status = match err.kind() {
                    DecisionErrorKind::NoValidLoan => StatusCode::NOT_FOUND,
                    DecisionErrorKind::InvalidPersonalCode
                    | DecisionErrorKind::InvalidLoanAmount
                    | DecisionErrorKind::InvalidLoanPeriod
                    | DecisionErrorKind::MalformedCode
                    | DecisionErrorKind::Underage
                    | DecisionErrorKind::Overage => StatusCode::BAD_REQUEST,
                };
                (status, err.to_string())
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        (status, Json(Decision::rejected(message))).into_response()
    }
}

impl From<DecisionError> for AppError {
    fn from(value: DecisionError) -> Self {
        Self::Decision(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn read_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn validation_failures_are_bad_requests() {
        let response = AppError::from(DecisionError::Underage).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["errorMessage"], "The client is too young.");
        assert!(body.get("approvedAmount").is_none());
        assert!(body.get("approvedPeriod").is_none());
    }

    #[tokio::test]
    async fn missing_segment_is_not_found() {
        let response = AppError::from(DecisionError::NoValidLoan).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = read_json(response).await;
        assert_eq!(
            body["errorMessage"],
            "No valid loan found due to low credit score segment."
        );
    }

    #[tokio::test]
    async fn infrastructure_failures_are_internal_errors() {
        let response = AppError::from(ConfigError::InvalidPort).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(
            body["errorMessage"],
            "configuration error: APP_PORT must be a valid u16"
        );
    }

    #[test]
    fn display_prefixes_declines_for_the_cli() {
        let error = AppError::from(DecisionError::Overage);
        assert_eq!(
            error.to_string(),
            "decision declined: The client is older than the age limit for this loan."
        );
    }
}
