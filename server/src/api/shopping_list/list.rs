use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, ShoppingListItem};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShoppingListResponse {
    pub items: Vec<ShoppingListItem>,
}

#[utoipa::path(
    get,
    path = "/api/shopping-list",
    tag = "shopping_list",
    responses(
        (status = 200, description = "Shopping list items, unchecked first", body = ShoppingListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_items(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut items = state
        .shopping_lists
        .read()
        .unwrap()
        .get(&user.username)
        .cloned()
        .unwrap_or_default();
    items.sort_by_key(|i| (i.is_checked, i.sort_order));

    (StatusCode::OK, Json(ShoppingListResponse { items }))
}
