use crate::infra::{local_today, AppState, Clock};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use loan_decision::decision::{Decision, DecisionEngine, LoanRequest, PersonalCodeValidator};
use loan_decision::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub(crate) struct DecisionState<V> {
    engine: Arc<DecisionEngine<V>>,
    clock: Clock,
}

impl<V> DecisionState<V> {
    pub(crate) fn new(engine: Arc<DecisionEngine<V>>, clock: Clock) -> Self {
        Self { engine, clock }
    }
}

impl<V> Clone for DecisionState<V> {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
            clock: self.clock,
        }
    }
}

pub(crate) fn decision_router<V>(engine: Arc<DecisionEngine<V>>) -> Router
where
    V: PersonalCodeValidator + 'static,
{
    decision_router_with_clock(engine, local_today)
}

pub(crate) fn decision_router_with_clock<V>(
    engine: Arc<DecisionEngine<V>>,
    clock: Clock,
) -> Router
where
    V: PersonalCodeValidator + 'static,
{
    Router::new()
        .route("/loan/decision", post(decision_endpoint::<V>))
        .with_state(DecisionState::new(engine, clock))
}

pub(crate) fn with_service_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn decision_endpoint<V>(
    State(state): State<DecisionState<V>>,
    Json(request): Json<LoanRequest>,
) -> Result<Json<Decision>, AppError>
where
    V: PersonalCodeValidator + 'static,
{
    let today = (state.clock)();

    match state.engine.decide(&request, today) {
        Ok(decision) => {
            info!(
                approved_amount = decision.approved_amount(),
                approved_period = decision.approved_period(),
                "loan decision approved"
            );
            Ok(Json(decision))
        }
        Err(error) => {
            info!(kind = error.kind().label(), "loan decision declined");
            Err(error.into())
        }
    }
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
