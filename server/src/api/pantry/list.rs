use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, PantryItem};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PantryResponse {
    pub items: Vec<PantryItem>,
}

#[utoipa::path(
    get,
    path = "/api/pantry",
    tag = "pantry",
    responses(
        (status = 200, description = "The user's tracked ingredients", body = PantryResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_items(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let items = state
        .pantry
        .read()
        .unwrap()
        .get(&user.username)
        .cloned()
        .unwrap_or_default();

    (StatusCode::OK, Json(PantryResponse { items }))
}
