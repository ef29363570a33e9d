use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use broker_readiness::workflows::onboarding::{
    onboarding_router, AnalysisRepository, OnboardingAnalysisService,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_onboarding_routes<R>(service: Arc<OnboardingAnalysisService<R>>) -> axum::Router
where
    R: AnalysisRepository + 'static,
{
    onboarding_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryAnalysisRepository;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        let repository = Arc::new(InMemoryAnalysisRepository::default());
        with_onboarding_routes(Arc::new(OnboardingAnalysisService::new(repository)))
            .layer(Extension(state))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app(true)
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await, json!({ "status": "initializing" }));
    }

    #[tokio::test]
    async fn submitted_response_can_be_fetched() {
        let app = app(true);
        let payload = json!({
            "crmUsage": "basic",
            "speedToContact": "30min",
            "teamSize": "small",
            "followUpClarity": "basic",
            "monthlySpend": "5k-15k",
            "cplAwareness": "rough",
            "pricingComfort": "sensitive",
            "desiredLeadsWeekly": 25,
            "maxCapacityWeekly": 20,
            "productFocusClarity": "multiple",
            "geographicFocusClarity": "semi",
            "growthGoalClarity": "general",
            "timeline": "30days"
        });

        let created = app
            .clone()
            .oneshot(
                Request::post("/api/v1/onboarding/responses")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = body_json(created).await;
        assert_eq!(
            created.get("riskFlags"),
            Some(&json!(["capacity-mismatch", "price-sensitive-high-volume"]))
        );
        let id = created
            .get("responseId")
            .and_then(serde_json::Value::as_str)
            .expect("response id")
            .to_string();

        let fetched = app
            .oneshot(
                Request::get(format!("/api/v1/onboarding/responses/{id}"))
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("route executes");
        assert_eq!(fetched.status(), StatusCode::OK);
        assert_eq!(body_json(fetched).await, created);
    }
}
