use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chefai_core::Feature;

use super::check::FeatureCheckResponse;

/// Record one free use of a gated feature: stamps today's date and bumps
/// the counter. The feature stays unavailable for the rest of the
/// calendar date for non-premium users.
#[utoipa::path(
    post,
    path = "/api/features/{key}/use",
    tag = "features",
    params(
        ("key" = String, Path, description = "Feature key, e.g. nutrition")
    ),
    responses(
        (status = 200, description = "Usage recorded; availability after recording", body = FeatureCheckResponse),
        (status = 400, description = "Unknown feature key", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn record_feature_use(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let Some(feature) = Feature::from_key(&key) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unknown feature: {key}"),
            }),
        )
            .into_response();
    };

    let mut gate = match state.gate_for(&user.username) {
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

    if let Err(e) = gate.record_usage(feature) {
        tracing::error!("Failed to record feature usage: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to record feature usage".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(FeatureCheckResponse {
            available: gate.is_feature_available(feature),
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
    async fn recording_spends_the_daily_free_use() {
        let app = test_app();
        let token = signed_in(&app, "rosa");
        let user = user_for_token(&app, &token).unwrap();

        let response = record_feature_use(
            AuthUser(user.clone()),
            State(app.clone()),
            Path("shoppingList".to_string()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let gate = app.gate_for("rosa").unwrap();
        assert!(!gate.is_available("shoppingList"));

        // Premium upgrade makes it available again despite the history.
        let mut gate = app.gate_for("rosa").unwrap();
        gate.set_premium(true).unwrap();
        assert!(app.gate_for("rosa").unwrap().is_available("shoppingList"));
    }

    #[tokio::test]
    async fn unknown_feature_key_is_rejected() {
        let app = test_app();
        let token = signed_in(&app, "sven");
        let user = user_for_token(&app, &token).unwrap();

        let response = record_feature_use(
            AuthUser(user),
            State(app),
            Path("timeTravel".to_string()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
