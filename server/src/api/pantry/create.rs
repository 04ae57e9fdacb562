use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, PantryItem};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePantryItemRequest {
    pub name: String,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatePantryItemResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/pantry",
    tag = "pantry",
    request_body = CreatePantryItemRequest,
    responses(
        (status = 201, description = "Ingredient added", body = CreatePantryItemResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_item(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreatePantryItemRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Ingredient name is required".to_string(),
            }),
        )
            .into_response();
    }

    let item = PantryItem {
        id: Uuid::new_v4(),
        name: request.name.trim().to_string(),
        quantity: request.quantity,
        unit: request.unit,
        added_at: state.clock.now(),
    };
    let id = item.id;

    state
        .pantry
        .write()
        .unwrap()
        .entry(user.username)
        .or_default()
        .push(item);

    (StatusCode::CREATED, Json(CreatePantryItemResponse { id })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::{signed_in, test_app};

    #[tokio::test]
    async fn items_are_kept_per_user() {
        let app = test_app();
        let token = signed_in(&app, "tess");
        let user = user_for_token(&app, &token).unwrap();

        let response = create_item(
            AuthUser(user),
            State(app.clone()),
            Json(CreatePantryItemRequest {
                name: "  basil ".to_string(),
                quantity: Some("1".to_string()),
                unit: Some("bunch".to_string()),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let pantry = app.pantry.read().unwrap();
        assert_eq!(pantry.get("tess").unwrap().len(), 1);
        assert_eq!(pantry.get("tess").unwrap()[0].name, "basil");
        assert!(pantry.get("someone-else").is_none());
    }
}
