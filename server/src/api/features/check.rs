use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeatureCheckResponse {
    pub feature: String,
    pub available: bool,
}

/// Whether a feature key renders its content or the upsell overlay. Keys
/// naming no gated feature are always available.
#[utoipa::path(
    get,
    path = "/api/features/{key}",
    tag = "features",
    params(
        ("key" = String, Path, description = "Feature key, e.g. shoppingList")
    ),
    responses(
        (status = 200, description = "Availability for the feature key", body = FeatureCheckResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn check_feature(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let gate = match state.gate_for(&user.username) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!("Failed to load premium state: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load subscription state".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(FeatureCheckResponse {
            available: gate.is_available(&key),
            feature: key,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::{signed_in, test_app};

    #[tokio::test]
    async fn unknown_keys_are_always_available() {
        let app = test_app();
        let token = signed_in(&app, "quinn");
        let user = user_for_token(&app, &token).unwrap();

        let response = check_feature(
            AuthUser(user),
            State(app),
            Path("darkMode".to_string()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
