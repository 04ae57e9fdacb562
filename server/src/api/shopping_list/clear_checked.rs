use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClearCheckedResponse {
    pub removed: usize,
}

/// Remove every checked item in one sweep.
#[utoipa::path(
    delete,
    path = "/api/shopping-list/clear-checked",
    tag = "shopping_list",
    responses(
        (status = 200, description = "Checked items removed", body = ClearCheckedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn clear_checked(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut lists = state.shopping_lists.write().unwrap();
    let removed = match lists.get_mut(&user.username) {
        Some(items) => {
            let before = items.len();
            items.retain(|i| !i.is_checked);
            before - items.len()
        }
        None => 0,
    };

    (StatusCode::OK, Json(ClearCheckedResponse { removed }))
}
