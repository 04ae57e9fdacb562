use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, RecipeSubmission, SubmissionStatus};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::{Category, Ingredient};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitRecipeRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitRecipeResponse {
    pub id: Uuid,
    pub status: SubmissionStatus,
}

/// Submit a recipe into the simulated approval pipeline. The submission
/// lands as pending for the admin console; nothing ever mutates the
/// static catalog.
#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = SubmitRecipeRequest,
    responses(
        (status = 201, description = "Submission accepted", body = SubmitRecipeResponse),
        (status = 400, description = "Missing title", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn submit_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<SubmitRecipeRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title is required".to_string(),
            }),
        )
            .into_response();
    }

    state.simulate_backend().await;

    let submission = RecipeSubmission {
        id: Uuid::new_v4(),
        title: request.title.trim().to_string(),
        description: request.description,
        category: request.category,
        ingredients: request.ingredients,
        instructions: request.instructions,
        submitted_by: user.username,
        status: SubmissionStatus::Pending,
        created_at: state.clock.now(),
    };
    let id = submission.id;

    state.submissions.write().unwrap().push(submission);

    (
        StatusCode::CREATED,
        Json(SubmitRecipeResponse {
            id,
            status: SubmissionStatus::Pending,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::{signed_in, test_app};

    #[tokio::test]
    async fn submission_lands_pending_and_leaves_catalog_untouched() {
        let app = test_app();
        let token = signed_in(&app, "jonas");
        let user = user_for_token(&app, &token).unwrap();
        let catalog_size = app.catalog.recipes().len();

        let response = submit_recipe(
            AuthUser(user),
            State(app.clone()),
            Json(SubmitRecipeRequest {
                title: "Midnight Ramen".to_string(),
                description: "Late-night noodles".to_string(),
                category: Category::Food,
                ingredients: vec![],
                instructions: vec![],
            }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let submissions = app.submissions.read().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].status, SubmissionStatus::Pending);
        assert_eq!(app.catalog.recipes().len(), catalog_size);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let app = test_app();
        let token = signed_in(&app, "kira");
        let user = user_for_token(&app, &token).unwrap();

        let response = submit_recipe(
            AuthUser(user),
            State(app),
            Json(SubmitRecipeRequest {
                title: "   ".to_string(),
                description: String::new(),
                category: Category::Desserts,
                ingredients: vec![],
                instructions: vec![],
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
