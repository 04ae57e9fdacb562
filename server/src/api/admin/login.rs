use crate::api::ErrorResponse;
use crate::auth::create_admin_session;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::storage::keys;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub passcode: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub token: String,
}

/// Console login: a fixed passcode check (CHEFAI_ADMIN_PASSCODE, default
/// "chef-admin"), then the persisted admin flag is set and a console
/// token issued. Not a real credential system.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Console unlocked", body = AdminLoginResponse),
        (status = 401, description = "Wrong passcode", body = ErrorResponse)
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(req): Json<AdminLoginRequest>,
) -> impl IntoResponse {
    let expected =
        std::env::var("CHEFAI_ADMIN_PASSCODE").unwrap_or_else(|_| "chef-admin".to_string());

    if req.passcode != expected {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Wrong passcode".to_string(),
            }),
        )
            .into_response();
    }

    state.simulate_backend().await;

    if let Err(e) = state.store.set(keys::ADMIN_AUTHENTICATED, "true") {
        tracing::error!("Failed to persist admin flag: {}", e);
    }

    let token = create_admin_session(&state);
    tracing::info!("admin console unlocked");
    (StatusCode::OK, Json(AdminLoginResponse { token })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::test_app;

    #[tokio::test]
    async fn default_passcode_unlocks_the_console() {
        let app = test_app();
        let response = admin_login(
            State(app.clone()),
            Json(AdminLoginRequest {
                passcode: "chef-admin".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            app.store.get(keys::ADMIN_AUTHENTICATED).unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn wrong_passcode_is_rejected() {
        let app = test_app();
        let response = admin_login(
            State(app),
            Json(AdminLoginRequest {
                passcode: "guess".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
