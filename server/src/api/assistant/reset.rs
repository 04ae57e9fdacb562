use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};

/// Discard the current conversation. The next message opens a fresh
/// session with the welcome message (and spends a new free daily use for
/// non-premium users).
#[utoipa::path(
    post,
    path = "/api/assistant/reset",
    tag = "assistant",
    responses(
        (status = 204, description = "Conversation discarded"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn reset_conversation(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    state.conversations.write().unwrap().remove(&user.username);
    StatusCode::NO_CONTENT
}
