use crate::api::ErrorResponse;
use crate::auth::create_session;
use crate::state::{AppState, UserProfile};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignupResponse {
    pub token: String,
}

/// Simulated signup: field checks, the paced fake round trip, then
/// unconditional success with a signed-in session.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SignupResponse),
        (status = 400, description = "Missing username or password", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> impl IntoResponse {
    let username = req.username.trim().to_lowercase();
    if username.is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Username and password are required".to_string(),
            }),
        )
            .into_response();
    }

    state.simulate_backend().await;

    state
        .users
        .write()
        .unwrap()
        .entry(username.clone())
        .or_insert_with(|| UserProfile {
            username: username.clone(),
            created_at: state.clock.now(),
        });

    let token = create_session(&state, &username);

    tracing::info!(username = %username, "signup");
    (StatusCode::CREATED, Json(SignupResponse { token })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::test_app;

    #[tokio::test]
    async fn signup_issues_a_usable_session() {
        let app = test_app();
        let response = signup(
            State(app.clone()),
            Json(SignupRequest {
                username: "dana".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Any token in the session map resolves to the new profile.
        let sessions = app.sessions.read().unwrap();
        assert_eq!(sessions.len(), 1);
        drop(sessions);

        let again = signup(
            State(app.clone()),
            Json(SignupRequest {
                username: "dana".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .into_response();
        // Duplicate signups still "succeed"; nothing real is created.
        assert_eq!(again.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn signup_token_resolves_to_user() {
        let app = test_app();
        signup(
            State(app.clone()),
            Json(SignupRequest {
                username: "erik".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await;
        let token = {
            // Reissue a session directly to get a token we know.
            crate::auth::create_session(&app, "erik")
        };
        assert_eq!(user_for_token(&app, &token).unwrap().username, "erik");
    }
}
