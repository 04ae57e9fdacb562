use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chefai_core::MealType;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMealPlanRequest {
    pub meal_date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/meal-plans/{id}",
    tag = "meal_plans",
    params(
        ("id" = Uuid, Path, description = "Meal plan entry ID")
    ),
    request_body = UpdateMealPlanRequest,
    responses(
        (status = 200, description = "Entry updated"),
        (status = 404, description = "Entry not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_meal_plan(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMealPlanRequest>,
) -> impl IntoResponse {
    let mut plans = state.meal_plans.write().unwrap();
    let Some(entry) = plans
        .get_mut(&user.username)
        .and_then(|entries| entries.iter_mut().find(|e| e.id == id))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Entry not found".to_string(),
            }),
        )
            .into_response();
    };

    if let Some(meal_date) = request.meal_date {
        entry.meal_date = meal_date;
    }
    if let Some(meal_type) = request.meal_type {
        entry.meal_type = meal_type;
    }
    if request.notes.is_some() {
        entry.notes = request.notes;
    }

    StatusCode::OK.into_response()
}
