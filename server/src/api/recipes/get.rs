use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::{AppState, GateDecision};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chefai_core::{Feature, Recipe};

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Full recipe", body = Recipe),
        (status = 402, description = "Premium recipe, free daily use exhausted", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_recipe(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Some(recipe) = state.catalog.recipe(&id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response();
    };

    // Premium-only recipes spend the daily free use of the instructions
    // feature; subscribers pass straight through.
    if recipe.is_premium_only {
        match state.consume_feature(&user.username, Feature::Instructions) {
            Ok(GateDecision::Granted) => {}
            Ok(GateDecision::Denied) => {
                return (
                    StatusCode::PAYMENT_REQUIRED,
                    Json(ErrorResponse {
                        error: "Free daily use exhausted. Upgrade to premium for unlimited access."
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
    }

    (StatusCode::OK, Json(recipe.clone())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{signed_in, test_app};
    use crate::auth::user_for_token;

    #[tokio::test]
    async fn free_recipe_is_always_served() {
        let app = test_app();
        let token = signed_in(&app, "frida");
        let user = user_for_token(&app, &token).unwrap();

        for _ in 0..3 {
            let response = get_recipe(
                AuthUser(user.clone()),
                State(app.clone()),
                Path("pasta-primavera".to_string()),
            )
            .await
            .into_response();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn premium_recipe_allows_one_free_daily_view() {
        let app = test_app();
        let token = signed_in(&app, "gus");
        let user = user_for_token(&app, &token).unwrap();

        let first = get_recipe(
            AuthUser(user.clone()),
            State(app.clone()),
            Path("beef-wellington".to_string()),
        )
        .await
        .into_response();
        assert_eq!(first.status(), StatusCode::OK);

        let second = get_recipe(
            AuthUser(user.clone()),
            State(app.clone()),
            Path("beef-wellington".to_string()),
        )
        .await
        .into_response();
        assert_eq!(second.status(), StatusCode::PAYMENT_REQUIRED);

        // Upgrading unlocks it regardless of the spent free use.
        let mut gate = app.gate_for("gus").unwrap();
        gate.set_premium(true).unwrap();
        let third = get_recipe(
            AuthUser(user),
            State(app.clone()),
            Path("beef-wellington".to_string()),
        )
        .await
        .into_response();
        assert_eq!(third.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_recipe_is_404() {
        let app = test_app();
        let token = signed_in(&app, "hana");
        let user = user_for_token(&app, &token).unwrap();
        let response = get_recipe(
            AuthUser(user),
            State(app),
            Path("no-such-recipe".to_string()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
