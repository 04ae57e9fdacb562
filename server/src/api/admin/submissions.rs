use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::state::{AppState, RecipeSubmission};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListSubmissionsResponse {
    pub submissions: Vec<RecipeSubmission>,
}

#[utoipa::path(
    get,
    path = "/api/admin/submissions",
    tag = "admin",
    responses(
        (status = 200, description = "Recipe submissions, newest first", body = ListSubmissionsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_submissions(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut submissions = state.submissions.read().unwrap().clone();
    submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    (StatusCode::OK, Json(ListSubmissionsResponse { submissions }))
}
