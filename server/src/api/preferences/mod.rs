pub mod get;
pub mod update;

use crate::state::AppState;
use axum::routing::get as get_method;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/preferences endpoints
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get_method(get::get_preferences).put(update::update_preferences),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(get::get_preferences, update::update_preferences),
    components(schemas(update::UpdatePreferencesRequest))
)]
pub struct ApiDoc;
