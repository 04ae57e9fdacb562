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
pub struct UpdatePantryItemRequest {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/pantry/{id}",
    tag = "pantry",
    params(
        ("id" = Uuid, Path, description = "Pantry item ID")
    ),
    request_body = UpdatePantryItemRequest,
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
    Json(request): Json<UpdatePantryItemRequest>,
) -> impl IntoResponse {
    let mut pantry = state.pantry.write().unwrap();
    let Some(item) = pantry
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

    if let Some(name) = request.name {
        if !name.trim().is_empty() {
            item.name = name.trim().to_string();
        }
    }
    if request.quantity.is_some() {
        item.quantity = request.quantity;
    }
    if request.unit.is_some() {
        item.unit = request.unit;
    }

    StatusCode::OK.into_response()
}
