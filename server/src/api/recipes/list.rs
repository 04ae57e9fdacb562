use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chefai_core::{Category, Difficulty, FilterState, Recipe};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Browse filters, straight from the URL query string. All values are
/// untrusted: unrecognized category/meal-type values degrade to the
/// defaults instead of erroring.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Category tab: food | desserts | drinks (default: food)
    pub category: Option<String>,
    /// Subcategory id within the category
    pub subcategory: Option<String>,
    /// Cuisine, matched case-insensitively
    pub cuisine: Option<String>,
    /// Meal type selection; carried but never constrains results
    #[serde(rename = "mealType")]
    pub meal_type: Option<String>,
    /// Free-text search over title and description
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cuisine: String,
    pub category: Category,
    pub subcategory: String,
    pub difficulty: Difficulty,
    pub total_time_minutes: u32,
    pub is_premium_only: bool,
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            cuisine: recipe.cuisine.clone(),
            category: recipe.category,
            subcategory: recipe.subcategory.clone(),
            difficulty: recipe.difficulty,
            total_time_minutes: recipe.prep_time_minutes + recipe.cook_time_minutes,
            is_premium_only: recipe.is_premium_only,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub total: usize,
}

/// Build the engine filter from the query parameters. The browse view
/// defaults to the food tab when the URL names no (recognizable)
/// category.
pub(super) fn filter_from_params(params: &ListRecipesParams) -> FilterState {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if let Some(category) = &params.category {
        pairs.push(("category", category.as_str()));
    }
    if let Some(subcategory) = &params.subcategory {
        pairs.push(("subcategory", subcategory.as_str()));
    }
    if let Some(cuisine) = &params.cuisine {
        pairs.push(("cuisine", cuisine.as_str()));
    }
    if let Some(meal_type) = &params.meal_type {
        pairs.push(("mealType", meal_type.as_str()));
    }
    if let Some(search) = &params.search {
        pairs.push(("search", search.as_str()));
    }

    let mut filters = FilterState::from_query(pairs);
    if filters.category.is_none() {
        filters.set_category(Some(Category::Food));
    }
    filters
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "Visible recipes for the current filters", body = ListRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_recipes(
    AuthUser(_user): AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let filters = filter_from_params(&params);
    let recipes: Vec<RecipeSummary> = filters
        .visible_recipes(state.catalog)
        .into_iter()
        .map(RecipeSummary::from)
        .collect();

    let total = recipes.len();
    (StatusCode::OK, Json(ListRecipesResponse { recipes, total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(category: Option<&str>, cuisine: Option<&str>) -> ListRecipesParams {
        ListRecipesParams {
            category: category.map(str::to_string),
            cuisine: cuisine.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_to_the_food_tab() {
        let filters = filter_from_params(&params(None, None));
        assert_eq!(filters.category, Some(Category::Food));
    }

    #[test]
    fn unrecognized_category_falls_back_to_food() {
        let filters = filter_from_params(&params(Some("snacks"), None));
        assert_eq!(filters.category, Some(Category::Food));
    }

    #[test]
    fn cuisine_and_category_are_seeded() {
        let filters = filter_from_params(&params(Some("drinks"), Some("Indian")));
        assert_eq!(filters.category, Some(Category::Drinks));
        assert_eq!(filters.cuisine.as_deref(), Some("Indian"));
    }
}
