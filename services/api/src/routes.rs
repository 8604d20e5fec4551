use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_manifest::assessment::{
    assessment_router, AssessmentRepository, AssessmentService, QuestionCatalog,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<C, R>(service: Arc<AssessmentService<C, R>>) -> axum::Router
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    assessment_router(service)
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
    use crate::infra::{InMemoryAssessmentRepository, StaticQuestionCatalog};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use career_manifest::assessment::ScoringEngine;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(AssessmentService::new(
            Arc::new(StaticQuestionCatalog::default()),
            Arc::new(InMemoryAssessmentRepository::default()),
            ScoringEngine::standard(),
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_assessment_routes(service).layer(Extension(state))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_the_flag() {
        let initializing = app(false)
            .oneshot(get("/ready"))
            .await
            .expect("router responds");
        assert_eq!(initializing.status(), StatusCode::SERVICE_UNAVAILABLE);

        let ready = app(true)
            .oneshot(get("/ready"))
            .await
            .expect("router responds");
        assert_eq!(ready.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let response = app(true)
            .oneshot(get("/metrics"))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn assessment_routes_are_mounted() {
        let response = app(true)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/assessments")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({
                            "user_id": 9,
                            "answers": [
                                { "question_id": 1, "selected": 4 },
                                { "question_id": 29, "selected": 0 }
                            ]
                        })
                        .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["user_id"], 9);
        assert_eq!(body["result"]["version"]["assessment"], "2.0.0");
    }
}
