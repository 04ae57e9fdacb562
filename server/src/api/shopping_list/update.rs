use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateShoppingListItemRequest {
    pub item: Option<String>,
    pub amount: Option<String>,
    pub note: Option<String>,
    pub is_checked: Option<bool>,
    pub sort_order: Option<i32>,
}

#[utoipa::path(
    put,
    path = "/api/shopping-list/{id}",
    tag = "shopping_list",
    params(
        ("id" = Uuid, Path, description = "Shopping list item ID")
    ),
    request_body = UpdateShoppingListItemRequest,
    responses(
        (status = 200, description = "Item updated"),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_item(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateShoppingListItemRequest>,
) -> impl IntoResponse {
    let mut lists = state.shopping_lists.write().unwrap();
    let Some(item) = lists
        .get_mut(&user.username)
        .and_then(|items| items.iter_mut().find(|i| i.id == id))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Item not found".to_string(),
            }),
        )
            .into_response();
    };

    if let Some(name) = request.item {
        if !name.trim().is_empty() {
            item.item = name.trim().to_string();
        }
    }
    if request.amount.is_some() {
        item.amount = request.amount;
    }
    if request.note.is_some() {
        item.note = request.note;
    }
    if let Some(is_checked) = request.is_checked {
        item.is_checked = is_checked;
    }
    if let Some(sort_order) = request.sort_order {
        item.sort_order = sort_order;
    }

    StatusCode::OK.into_response()
}
