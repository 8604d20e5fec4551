use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::Answer;
use super::repository::{
    AssessmentId, AssessmentRepository, QuestionCatalog, RepositoryError, UserId,
};
use super::service::{AssessmentService, AssessmentServiceError};

/// Submission body for `POST /api/v1/assessments`.
#[derive(Debug, Deserialize)]
pub struct SubmitAssessmentRequest {
    pub user_id: UserId,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnerQuery {
    pub(crate) user_id: UserId,
}

/// Router builder exposing the question catalog and assessment endpoints.
pub fn assessment_router<C, R>(service: Arc<AssessmentService<C, R>>) -> Router
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<C, R>))
        .route(
            "/api/v1/assessments",
            get(history_handler::<C, R>).post(submit_handler::<C, R>),
        )
        .route(
            "/api/v1/assessments/:assessment_id",
            get(fetch_handler::<C, R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
) -> Response
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    match service.questions() {
        Ok(questions) => (StatusCode::OK, axum::Json(questions)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    axum::Json(request): axum::Json<SubmitAssessmentRequest>,
) -> Response
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    match service.submit(request.user_id, request.answers).await {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Query(owner): Query<OwnerQuery>,
) -> Response
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    match service.history(owner.user_id) {
        Ok(items) => (StatusCode::OK, axum::Json(items)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<C, R>(
    State(service): State<Arc<AssessmentService<C, R>>>,
    Path(assessment_id): Path<String>,
    Query(owner): Query<OwnerQuery>,
) -> Response
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.get(&id, owner.user_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(AssessmentServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "assessment not found",
                "assessment_id": id.0,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::EmptySubmission => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Forbidden => StatusCode::FORBIDDEN,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | AssessmentServiceError::Catalog(_)
        | AssessmentServiceError::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
