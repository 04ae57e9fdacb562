pub mod get;
pub mod list;
pub mod subcategories;
pub mod submit;

use crate::state::AppState;
use axum::routing::get as get_method;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get_method(list::list_recipes).post(submit::submit_recipe),
        )
        .route(
            "/subcategories",
            get_method(subcategories::list_subcategories),
        )
        .route("/{id}", get_method(get::get_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        subcategories::list_subcategories,
        submit::submit_recipe,
    ),
    components(schemas(
        list::ListRecipesResponse,
        list::RecipeSummary,
        subcategories::ListSubcategoriesResponse,
        submit::SubmitRecipeRequest,
        submit::SubmitRecipeResponse,
    ))
)]
pub struct ApiDoc;
