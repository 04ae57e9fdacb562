pub mod history;
pub mod message;
pub mod reset;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/assistant endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/message", post(message::send_message))
        .route("/reset", post(reset::reset_conversation))
        .route("/history", get(history::conversation_history))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        message::send_message,
        reset::reset_conversation,
        history::conversation_history,
    ),
    components(schemas(
        message::SendMessageRequest,
        message::SendMessageResponse,
        message::TimedReply,
        history::ConversationHistoryResponse,
    ))
)]
pub struct ApiDoc;
