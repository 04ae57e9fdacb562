pub mod check;
pub mod record;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/features endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{key}", get(check::check_feature))
        .route("/{key}/use", post(record::record_feature_use))
}

#[derive(OpenApi)]
#[openapi(
    paths(check::check_feature, record::record_feature_use),
    components(schemas(check::FeatureCheckResponse))
)]
pub struct ApiDoc;
