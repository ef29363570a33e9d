use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{RawOnboardingResponse, ResponseId};
use super::evaluation::analyze;
use super::intake::InvalidInputError;
use super::repository::{AnalysisRepository, RepositoryError};
use super::service::{AnalysisServiceError, OnboardingAnalysisService};

/// Router builder exposing intake and lookup endpoints for onboarding responses.
pub fn onboarding_router<R>(service: Arc<OnboardingAnalysisService<R>>) -> Router
where
    R: AnalysisRepository + 'static,
{
    Router::new()
        .route("/api/v1/onboarding/responses", post(submit_handler::<R>))
        .route(
            "/api/v1/onboarding/responses/:response_id",
            get(fetch_handler::<R>),
        )
        .route("/api/v1/onboarding/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<OnboardingAnalysisService<R>>>,
    axum::Json(raw): axum::Json<RawOnboardingResponse>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    match service.submit(raw) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(AnalysisServiceError::InvalidInput(error)) => invalid_input_response(&error),
        Err(AnalysisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "onboarding response already recorded",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<OnboardingAnalysisService<R>>>,
    Path(response_id): Path<String>,
) -> Response
where
    R: AnalysisRepository + 'static,
{
    let id = ResponseId(response_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "responseId": id.0,
                "error": "no analysis recorded for this response",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

/// Stateless scoring: nothing is stored and no id is allocated.
pub(crate) async fn score_handler(
    axum::Json(raw): axum::Json<RawOnboardingResponse>,
) -> Response {
    match analyze(&raw) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => invalid_input_response(&error),
    }
}

fn invalid_input_response(error: &InvalidInputError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "field": error.field(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
