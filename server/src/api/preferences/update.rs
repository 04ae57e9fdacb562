use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chefai_core::Preferences;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    pub language: Option<String>,
    pub dark_mode: Option<bool>,
}

#[utoipa::path(
    put,
    path = "/api/preferences",
    tag = "preferences",
    request_body = UpdatePreferencesRequest,
    responses(
        (status = 200, description = "Preferences saved", body = Preferences),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_preferences(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<UpdatePreferencesRequest>,
) -> impl IntoResponse {
    let store = state.user_store(&user.username);

    let mut prefs = match Preferences::load(store.as_ref()) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to load preferences: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load preferences".to_string(),
                }),
            )
                .into_response();
        }
    };

    if let Some(language) = request.language {
        if !language.trim().is_empty() {
            prefs.language = language.trim().to_string();
        }
    }
    if let Some(dark_mode) = request.dark_mode {
        prefs.dark_mode = dark_mode;
    }

    if let Err(e) = prefs.save(store.as_ref()) {
        tracing::error!("Failed to save preferences: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save preferences".to_string(),
            }),
        )
            .into_response();
    }

    (StatusCode::OK, Json(prefs)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::user_for_token;
    use crate::state::testing::{signed_in, test_app};

    #[tokio::test]
    async fn preferences_round_trip_through_the_store() {
        let app = test_app();
        let token = signed_in(&app, "ada");
        let user = user_for_token(&app, &token).unwrap();

        let response = update_preferences(
            AuthUser(user),
            State(app.clone()),
            Json(UpdatePreferencesRequest {
                language: Some("de".to_string()),
                dark_mode: Some(true),
            }),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let store = app.user_store("ada");
        let prefs = Preferences::load(store.as_ref()).unwrap();
        assert_eq!(prefs.language, "de");
        assert!(prefs.dark_mode);
    }
}
