use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chefai_core::{Category, Subcategory};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListSubcategoriesParams {
    /// Category tab: food | desserts | drinks (default: food)
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListSubcategoriesResponse {
    pub category: Category,
    pub subcategories: Vec<Subcategory>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/subcategories",
    tag = "recipes",
    params(ListSubcategoriesParams),
    responses(
        (status = 200, description = "Subcategories for the category", body = ListSubcategoriesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_subcategories(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListSubcategoriesParams>,
) -> impl IntoResponse {
    // Unrecognized values are untrusted input; fall back to the food tab.
    let category = params
        .category
        .as_deref()
        .and_then(|c| c.parse().ok())
        .unwrap_or(Category::Food);

    let subcategories = state
        .catalog
        .subcategories_for(category)
        .into_iter()
        .cloned()
        .collect();

    (
        StatusCode::OK,
        Json(ListSubcategoriesResponse {
            category,
            subcategories,
        }),
    )
}
