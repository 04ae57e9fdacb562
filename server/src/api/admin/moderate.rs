use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::state::{AppState, SubmissionStatus};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

/// Simulated moderation: the decision always "succeeds" after the paced
/// round trip and only flips the submission's status. Approval never
/// copies anything into the static catalog.
async fn moderate(
    state: AppState,
    id: Uuid,
    status: SubmissionStatus,
) -> Response {
    state.simulate_backend().await;

    let mut submissions = state.submissions.write().unwrap();
    let Some(submission) = submissions.iter_mut().find(|s| s.id == id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Submission not found".to_string(),
            }),
        )
            .into_response();
    };

    submission.status = status;
    tracing::info!(submission = %id, ?status, "submission moderated");
    StatusCode::OK.into_response()
}

#[utoipa::path(
    post,
    path = "/api/admin/submissions/{id}/approve",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission approved"),
        (status = 404, description = "Submission not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn approve_submission(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    moderate(state, id, SubmissionStatus::Approved).await
}

#[utoipa::path(
    post,
    path = "/api/admin/submissions/{id}/reject",
    tag = "admin",
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission rejected"),
        (status = 404, description = "Submission not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn reject_submission(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    moderate(state, id, SubmissionStatus::Rejected).await
}
