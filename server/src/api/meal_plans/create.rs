use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, GateDecision, MealPlanEntry};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::{Feature, MealType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMealPlanRequest {
    pub recipe_id: String,
    pub meal_date: NaiveDate,
    #[serde(default)]
    pub meal_type: MealType,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateMealPlanResponse {
    pub id: Uuid,
}

/// Plan a catalog recipe for a date. Meal planning is a gated feature:
/// the first plan of the day spends the free use for non-premium users.
#[utoipa::path(
    post,
    path = "/api/meal-plans",
    tag = "meal_plans",
    request_body = CreateMealPlanRequest,
    responses(
        (status = 201, description = "Meal plan created", body = CreateMealPlanResponse),
        (status = 400, description = "Recipe not found", body = ErrorResponse),
        (status = 402, description = "Free daily use exhausted", body = ErrorResponse),
        (status = 409, description = "Duplicate meal plan entry", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_meal_plan(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateMealPlanRequest>,
) -> impl IntoResponse {
    // Verify the recipe exists in the catalog.
    if state.catalog.recipe(&request.recipe_id).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response();
    }

    match state.consume_feature(&user.username, Feature::MealPlanning) {
        Ok(GateDecision::Granted) => {}
        Ok(GateDecision::Denied) => {
            return (
                StatusCode::PAYMENT_REQUIRED,
                Json(ErrorResponse {
                    error: "Free daily use exhausted. Upgrade to premium to keep planning."
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

    let mut plans = state.meal_plans.write().unwrap();
    let entries = plans.entry(user.username).or_default();

    // Same recipe in the same slot on the same date is a duplicate.
    let duplicate = entries.iter().any(|e| {
        e.recipe_id == request.recipe_id
            && e.meal_date == request.meal_date
            && e.meal_type == request.meal_type
    });
    if duplicate {
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "This recipe is already planned for this meal".to_string(),
            }),
        )
            .into_response();
    }

    let entry = MealPlanEntry {
        id: Uuid::new_v4(),
        recipe_id: request.recipe_id,
        meal_date: request.meal_date,
        meal_type: request.meal_type,
        notes: request.notes,
    };
    let id = entry.id;
    entries.push(entry);

    (StatusCode::CREATED, Json(CreateMealPlanResponse { id })).into_response()
}
