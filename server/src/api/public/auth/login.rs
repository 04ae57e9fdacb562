use crate::api::ErrorResponse;
use crate::auth::create_session;
use crate::state::{AppState, UserProfile};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

/// Simulated login: there is no credential store behind this. Once both
/// fields are present the flow succeeds unconditionally after the paced
/// fake round trip, creating the profile on first sight.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body(content = LoginRequest, example = json!({"username": "user", "password": "password"})),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Username and password are required".to_string(),
            }),
        )
            .into_response();
    }

    state.simulate_backend().await;

    let username = req.username.trim().to_lowercase();
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

    tracing::info!(username = %username, "login");
    (StatusCode::OK, Json(LoginResponse { token })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::test_app;

    #[tokio::test]
    async fn login_always_succeeds_with_fields_present() {
        let app = test_app();
        let response = login(
            State(app.clone()),
            Json(LoginRequest {
                username: "Carla".to_string(),
                password: "anything".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(app.users.read().unwrap().contains_key("carla"));
    }

    #[tokio::test]
    async fn login_rejects_empty_fields() {
        let app = test_app();
        let response = login(
            State(app),
            Json(LoginRequest {
                username: "  ".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
