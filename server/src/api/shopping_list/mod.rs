pub mod clear_checked;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::state::AppState;
use axum::routing::{delete as delete_method, get, put};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/shopping-list endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_items).post(create::create_items))
        .route(
            "/{id}",
            put(update::update_item).delete(delete::delete_item),
        )
        .route(
            "/clear-checked",
            delete_method(clear_checked::clear_checked),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_items,
        create::create_items,
        update::update_item,
        delete::delete_item,
        clear_checked::clear_checked
    ),
    components(schemas(
        clear_checked::ClearCheckedResponse,
        list::ShoppingListResponse,
        create::CreateShoppingListRequest,
        create::CreateShoppingListItemRequest,
        create::CreateShoppingListResponse,
        update::UpdateShoppingListItemRequest,
    ))
)]
pub struct ApiDoc;
