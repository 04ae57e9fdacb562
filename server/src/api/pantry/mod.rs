pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/pantry endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_items).post(create::create_item))
        .route(
            "/{id}",
            axum::routing::put(update::update_item).delete(delete::delete_item),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_item,
        update::update_item,
        delete::delete_item
    ),
    components(schemas(
        list::PantryResponse,
        create::CreatePantryItemRequest,
        create::CreatePantryItemResponse,
        update::UpdatePantryItemRequest,
    ))
)]
pub struct ApiDoc;
