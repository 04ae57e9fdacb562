use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::assistant::Message;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConversationHistoryResponse {
    pub messages: Vec<Message>,
}

/// The append-only message log for the current session; empty when no
/// conversation is open.
#[utoipa::path(
    get,
    path = "/api/assistant/history",
    tag = "assistant",
    responses(
        (status = 200, description = "Messages in the current conversation", body = ConversationHistoryResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn conversation_history(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let messages = state
        .conversations
        .read()
        .unwrap()
        .get(&user.username)
        .map(|c| c.messages().to_vec())
        .unwrap_or_default();

    (StatusCode::OK, Json(ConversationHistoryResponse { messages }))
}
