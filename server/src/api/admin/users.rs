use crate::api::ErrorResponse;
use crate::auth::AdminSession;
use crate::state::{AppState, UserProfile};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListUsersResponse {
    pub users: Vec<UserProfile>,
}

#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin",
    responses(
        (status = 200, description = "Known user profiles", body = ListUsersResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut users: Vec<UserProfile> = state.users.read().unwrap().values().cloned().collect();
    users.sort_by(|a, b| a.username.cmp(&b.username));

    (StatusCode::OK, Json(ListUsersResponse { users }))
}
