pub mod admin;
pub mod assistant;
pub mod features;
pub mod meal_plans;
pub mod pantry;
pub mod preferences;
pub mod public;
pub mod recipes;
pub mod shopping_list;
pub mod subscription;

use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

use crate::state::{
    MealPlanEntry, PantryItem, RecipeSubmission, ShoppingListItem, SubmissionStatus, UserProfile,
};
use chefai_core::assistant::Message;
use chefai_core::{
    Category, Difficulty, Feature, FeatureUsage, Ingredient, MealType, NutritionalInfo,
    Preferences, Recipe, Subcategory,
};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components and security
    #[derive(OpenApi)]
    #[openapi(components(schemas(
        ErrorResponse,
        Recipe,
        Ingredient,
        NutritionalInfo,
        Subcategory,
        Category,
        Difficulty,
        MealType,
        Feature,
        FeatureUsage,
        Preferences,
        Message,
        UserProfile,
        PantryItem,
        MealPlanEntry,
        ShoppingListItem,
        RecipeSubmission,
        SubmissionStatus,
    )))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        recipes::ApiDoc::openapi(),
        assistant::ApiDoc::openapi(),
        subscription::ApiDoc::openapi(),
        features::ApiDoc::openapi(),
        pantry::ApiDoc::openapi(),
        meal_plans::ApiDoc::openapi(),
        shopping_list::ApiDoc::openapi(),
        preferences::ApiDoc::openapi(),
        admin::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
