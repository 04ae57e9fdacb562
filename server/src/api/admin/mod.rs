pub mod login;
pub mod moderate;
pub mod submissions;
pub mod users;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the /api/admin console. Only the login route is
/// open; everything else requires an admin session token (a local flag
/// check, not a real credential system).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login::admin_login))
        .route("/users", get(users::list_users))
        .route("/submissions", get(submissions::list_submissions))
        .route("/submissions/{id}/approve", post(moderate::approve_submission))
        .route("/submissions/{id}/reject", post(moderate::reject_submission))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        login::admin_login,
        users::list_users,
        submissions::list_submissions,
        moderate::approve_submission,
        moderate::reject_submission,
    ),
    components(schemas(
        login::AdminLoginRequest,
        login::AdminLoginResponse,
        users::ListUsersResponse,
        submissions::ListSubmissionsResponse,
    ))
)]
pub struct ApiDoc;
