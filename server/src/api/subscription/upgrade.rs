use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PaymentRequest {
    pub card_number: String,
    pub expiry: String,
    pub cvc: String,
}

/// Simulated payment: field checks, the paced fake round trip, then the
/// upgrade succeeds unconditionally. No payment processor is called.
#[utoipa::path(
    post,
    path = "/api/subscription/upgrade",
    tag = "subscription",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Upgraded to premium"),
        (status = 400, description = "Missing card details", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn upgrade(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> impl IntoResponse {
    if request.card_number.trim().is_empty()
        || request.expiry.trim().is_empty()
        || request.cvc.trim().is_empty()
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Card number, expiry, and CVC are required".to_string(),
            }),
        )
            .into_response();
    }

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

    if let Err(e) = gate.set_premium(true) {
        tracing::error!("Failed to persist premium state: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save subscription state".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(username = %user.username, "premium upgrade");
    StatusCode::OK.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::{signed_in, test_app};

    #[tokio::test]
    async fn upgrade_flips_the_persisted_flag() {
        let app = test_app();
        let token = signed_in(&app, "olga");
        let user = user_for_token(&app, &token).unwrap();

        let response = upgrade(
            AuthUser(user),
            State(app.clone()),
            Json(PaymentRequest {
                card_number: "4242 4242 4242 4242".to_string(),
                expiry: "12/30".to_string(),
                cvc: "123".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(app.gate_for("olga").unwrap().is_premium());
    }

    #[tokio::test]
    async fn missing_card_details_fail_fast() {
        let app = test_app();
        let token = signed_in(&app, "pia");
        let user = user_for_token(&app, &token).unwrap();

        let response = upgrade(
            AuthUser(user),
            State(app.clone()),
            Json(PaymentRequest {
                card_number: String::new(),
                expiry: "12/30".to_string(),
                cvc: "123".to_string(),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!app.gate_for("pia").unwrap().is_premium());
    }
}
