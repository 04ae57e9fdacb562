use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, GateDecision};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::assistant::Message;
use chefai_core::Feature;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub content: String,
}

/// One scripted reply plus the presentation delay the client should wait
/// before rendering it. The delay paces the fake "thinking"; it is not a
/// timeout.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimedReply {
    pub message: Message,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SendMessageResponse {
    pub replies: Vec<TimedReply>,
}

/// Run one user message through the scripted matcher. Opening a
/// conversation spends the daily free use of the assistant for
/// non-premium users; subsequent messages in the same session are free.
#[utoipa::path(
    post,
    path = "/api/assistant/message",
    tag = "assistant",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Scripted replies, in order", body = SendMessageResponse),
        (status = 400, description = "Empty message", body = ErrorResponse),
        (status = 402, description = "Free daily use exhausted", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn send_message(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<SendMessageRequest>,
) -> impl IntoResponse {
    if request.content.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Message content is required".to_string(),
            }),
        )
            .into_response();
    }

    let needs_conversation = !state
        .conversations
        .read()
        .unwrap()
        .contains_key(&user.username);

    if needs_conversation {
        match state.consume_feature(&user.username, Feature::AiFeatures) {
            Ok(GateDecision::Granted) => {}
            Ok(GateDecision::Denied) => {
                return (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(ErrorResponse {
                        error: "Free daily use exhausted. Upgrade to premium for unlimited chats."
                            .to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!("Failed to update feature usage: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to check feature availability".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    let mut conversations = state.conversations.write().unwrap();
    let conversation = conversations
        .entry(user.username.clone())
        .or_insert_with(|| state.engine.new_conversation());

    let replies = state
        .engine
        .respond(conversation, &request.content)
        .into_iter()
        .map(|reply| TimedReply {
            delay_ms: reply.delay.as_millis() as u64,
            message: reply.message,
        })
        .collect();

    (StatusCode::OK, Json(SendMessageResponse { replies })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::{signed_in, test_app};

    async fn send(app: &AppState, user: &str, content: &str) -> axum::response::Response {
        let token = signed_in(app, user);
        let profile = user_for_token(app, &token).unwrap();
        send_message(
            AuthUser(profile),
            State(app.clone()),
            Json(SendMessageRequest {
                content: content.to_string(),
            }),
        )
        .await
        .into_response()
    }

    #[tokio::test]
    async fn scripted_flow_over_the_api() {
        let app = test_app();
        let first = send(&app, "lena", "I have pasta and tomatoes").await;
        assert_eq!(first.status(), StatusCode::OK);

        let second = send(&app, "lena", "yes").await;
        assert_eq!(second.status(), StatusCode::OK);

        let log = app.conversations.read().unwrap();
        let conversation = log.get("lena").unwrap();
        // welcome + 2 user turns + 1 reply + 3 replies
        assert_eq!(conversation.messages().len(), 7);
    }

    #[tokio::test]
    async fn second_session_same_day_is_gated_for_free_users() {
        let app = test_app();
        let response = send(&app, "milo", "hello").await;
        assert_eq!(response.status(), StatusCode::OK);

        // A reset ends the session; reopening the same day is denied.
        app.conversations.write().unwrap().remove("milo");
        let response = send(&app, "milo", "hello again").await;
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[tokio::test]
    async fn empty_message_is_rejected() {
        let app = test_app();
        let response = send(&app, "nora", "   ").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
