use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Simulated cancellation: always succeeds after the paced round trip.
/// The daily free-use history is preserved, so a canceled subscriber
/// falls back to the free-trial rules immediately.
#[utoipa::path(
    post,
    path = "/api/subscription/cancel",
    tag = "subscription",
    responses(
        (status = 200, description = "Subscription canceled"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn cancel(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    state.simulate_backend().await;

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

    if let Err(e) = gate.set_premium(false) {
        tracing::error!("Failed to persist premium state: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save subscription state".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(username = %user.username, "premium canceled");
    StatusCode::OK.into_response()
}
