pub mod cancel;
pub mod status;
pub mod upgrade;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/subscription endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status::subscription_status))
        .route("/upgrade", post(upgrade::upgrade))
        .route("/cancel", post(cancel::cancel))
}

#[derive(OpenApi)]
#[openapi(
    paths(status::subscription_status, upgrade::upgrade, cancel::cancel),
    components(schemas(
        status::SubscriptionStatusResponse,
        status::FeatureStatus,
        upgrade::PaymentRequest,
    ))
)]
pub struct ApiDoc;
