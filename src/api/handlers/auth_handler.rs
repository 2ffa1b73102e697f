//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserSummary;
use crate::errors::AppResult;

/// User login request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    /// User email address
    #[validate(length(min = 1))]
    #[schema(example = "vincent.causse@xanadu.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1))]
    #[schema(example = "Xanadu2025!")]
    pub password: String,
}

/// Successful login. Failures use the error body `{"success": false, "error": ...}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = true)]
    pub success: bool,
    pub user: UserSummary,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Check email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "invalid_body or missing_fields"),
        (status = 401, description = "invalid_credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        user: UserSummary::from(user),
    }))
}
