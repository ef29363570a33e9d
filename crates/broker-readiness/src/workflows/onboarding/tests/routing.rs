use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::onboarding::router::{fetch_handler, score_handler, submit_handler};
use crate::workflows::onboarding::OnboardingAnalysisService;

fn json_request(uri: &str, body: &serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serializable body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn submit_route_returns_created_record_view() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request("/api/v1/onboarding/responses", &raw_payload()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("responseId")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|id| id.starts_with("resp-")));
    assert_eq!(payload.get("successProbability"), Some(&json!(100)));
    assert_eq!(payload.get("successBand"), Some(&json!("Excellent")));
    assert_eq!(
        payload.get("primarySalesAngle"),
        Some(&json!("Balanced Partnership"))
    );
    assert_eq!(payload.get("riskFlags"), Some(&json!([])));
    assert_eq!(repository.len(), 1);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_invalid_input() {
    let (service, repository) = build_service();
    let mut raw = raw_best_case();
    raw.monthly_spend = Some("a lot".to_string());

    let response =
        submit_handler::<MemoryRepository>(State(Arc::new(service)), axum::Json(raw)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("field"), Some(&json!("monthlySpend")));
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(OnboardingAnalysisService::new(Arc::new(ConflictRepository)));

    let response =
        submit_handler::<ConflictRepository>(State(service), axum::Json(raw_best_case())).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(OnboardingAnalysisService::new(Arc::new(
        UnavailableRepository,
    )));

    let response =
        submit_handler::<UnavailableRepository>(State(service), axum::Json(raw_best_case())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn fetch_handler_returns_stored_analysis() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let record = service.submit(raw_best_case()).expect("submission succeeds");

    let response = fetch_handler::<MemoryRepository>(
        State(service.clone()),
        axum::extract::Path(record.response_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("responseId").and_then(serde_json::Value::as_str),
        Some(record.response_id.0.as_str())
    );
    assert!(payload
        .get("briefing")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|briefing| briefing.starts_with("Excellent readiness")));
}

#[tokio::test]
async fn fetch_handler_returns_not_found_for_unknown_id() {
    let (service, _) = build_service();

    let response = fetch_handler::<MemoryRepository>(
        State(Arc::new(service)),
        axum::extract::Path("resp-unknown".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("responseId"), Some(&json!("resp-unknown")));
}

#[tokio::test]
async fn score_route_is_stateless() {
    let (service, repository) = build_service();
    let router = router_with_service(service);
    let mut body = raw_payload();
    body["desiredLeadsWeekly"] = json!(50);

    let response = router
        .oneshot(json_request("/api/v1/onboarding/score", &body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("intentScore"), Some(&json!(25)));
    assert_eq!(payload.get("riskFlags"), Some(&json!(["capacity-mismatch"])));
    assert_eq!(repository.len(), 0);
}

#[tokio::test]
async fn score_handler_rejects_negative_counts() {
    let mut raw = raw_best_case();
    raw.max_capacity_weekly = Some(json!(-5));

    let response = score_handler(axum::Json(raw)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("field"), Some(&json!("maxCapacityWeekly")));
}
