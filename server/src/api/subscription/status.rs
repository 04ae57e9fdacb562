use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::Feature;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeatureStatus {
    pub feature: Feature,
    pub available: bool,
    /// Lifetime free-use count, if the feature was ever used.
    pub use_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubscriptionStatusResponse {
    pub is_premium: bool,
    pub features: Vec<FeatureStatus>,
}

#[utoipa::path(
    get,
    path = "/api/subscription",
    tag = "subscription",
    responses(
        (status = 200, description = "Premium status and per-feature availability", body = SubscriptionStatusResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn subscription_status(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
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

    let features = Feature::ALL
        .into_iter()
        .map(|feature| FeatureStatus {
            feature,
            available: gate.is_feature_available(feature),
            use_count: gate.usage(feature).map(|u| u.count),
        })
        .collect();

    (
        StatusCode::OK,
        Json(SubscriptionStatusResponse {
            is_premium: gate.is_premium(),
            features,
        }),
    )
        .into_response()
}
