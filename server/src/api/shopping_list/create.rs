use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, GateDecision, ShoppingListItem};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::Feature;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShoppingListItemRequest {
    pub item: String,
    pub amount: Option<String>,
    pub note: Option<String>,
    /// Catalog recipe the item came from, if any.
    pub source_recipe_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShoppingListRequest {
    pub items: Vec<CreateShoppingListItemRequest>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateShoppingListResponse {
    pub ids: Vec<Uuid>,
}

/// Add items to the shopping list, e.g. a recipe's ingredients in one
/// batch. The first batch of the day spends the free use for non-premium
/// users.
#[utoipa::path(
    post,
    path = "/api/shopping-list",
    tag = "shopping_list",
    request_body = CreateShoppingListRequest,
    responses(
        (status = 201, description = "Items added", body = CreateShoppingListResponse),
        (status = 400, description = "No items or empty item name", body = ErrorResponse),
        (status = 402, description = "Free daily use exhausted", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_items(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateShoppingListRequest>,
) -> impl IntoResponse {
    if request.items.is_empty() || request.items.iter().any(|i| i.item.trim().is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Every item needs a name".to_string(),
            }),
        )
            .into_response();
    }

    match state.consume_feature(&user.username, Feature::ShoppingList) {
        Ok(GateDecision::Granted) => {}
        Ok(GateDecision::Denied) => {
            return (
                StatusCode::PAYMENT_REQUIRED,
                Json(ErrorResponse {
                    error: "Free daily use exhausted. Upgrade to premium to keep adding items."
                        .to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to update feature usage: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to check feature availability".to_string(),
                }),
            )
                .into_response();
        }
    }

    let mut lists = state.shopping_lists.write().unwrap();
    let items = lists.entry(user.username).or_default();
    let mut next_order = items.iter().map(|i| i.sort_order).max().unwrap_or(0);

    let mut ids = Vec::with_capacity(request.items.len());
    for incoming in request.items {
        next_order += 1;
        let item = ShoppingListItem {
            id: Uuid::new_v4(),
            item: incoming.item.trim().to_string(),
            amount: incoming.amount,
            note: incoming.note,
            source_recipe_id: incoming.source_recipe_id,
            is_checked: false,
            sort_order: next_order,
        };
        ids.push(item.id);
        items.push(item);
    }

    (StatusCode::CREATED, Json(CreateShoppingListResponse { ids })).into_response()
}
