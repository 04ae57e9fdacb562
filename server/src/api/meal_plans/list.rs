use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, MealPlanEntry};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealPlansResponse {
    pub entries: Vec<MealPlanEntry>,
}

#[utoipa::path(
    get,
    path = "/api/meal-plans",
    tag = "meal_plans",
    responses(
        (status = 200, description = "The user's planned meals, ordered by date", body = MealPlansResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_meal_plans(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let mut entries = state
        .meal_plans
        .read()
        .unwrap()
        .get(&user.username)
        .cloned()
        .unwrap_or_default();
    entries.sort_by_key(|e| e.meal_date);

    (StatusCode::OK, Json(MealPlansResponse { entries }))
}
