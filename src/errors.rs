//! Centralized error handling.
//!
//! Every failure is converted at the point it happens into one of these
//! variants; `IntoResponse` turns it into a status code and a short error code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request shape
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Missing required fields: {0}")]
    MissingFields(String),

    // Authentication
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    /// Holds the name of the field whose value is already taken
    #[error("{0} already exists")]
    Conflict(String),

    // Internal
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Database error")]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    error: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "invalid_body".to_string(),
            AppError::MissingFields(_) => "missing_fields".to_string(),
            AppError::InvalidCredentials => "invalid_credentials".to_string(),
            AppError::NotFound => "not_found".to_string(),
            AppError::Conflict(field) => format!("{}_exists", field),
            AppError::HashingFailed(_) => "hash_error".to_string(),
            AppError::Database(_) => "db_error".to_string(),
            AppError::Internal(_) => "internal_error".to_string(),
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::MissingFields(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::HashingFailed(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Log details that never reach the client
    fn log(&self) {
        match self {
            AppError::HashingFailed(msg) => tracing::error!("Password hashing failed: {}", msg),
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::BadRequest(msg) => tracing::debug!("Rejected request body: {}", msg),
            _ => {}
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = ErrorResponse {
            // Login failures keep the `success` flag of the login response shape
            success: matches!(self, AppError::InvalidCredentials).then_some(false),
            error: self.code(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(field: impl Into<String>) -> Self {
        AppError::Conflict(field.into())
    }

    pub fn missing_fields(fields: impl Into<String>) -> Self {
        AppError::MissingFields(fields.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Map an insert failure, turning a unique-index violation into a conflict
    /// on `field`.
    pub fn from_insert(err: DbErr, field: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(field),
            _ => AppError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_conflict_renders_field_code() {
        let (status, body) = body_of(AppError::conflict("email")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, serde_json::json!({ "error": "email_exists" }));
    }

    #[tokio::test]
    async fn test_invalid_credentials_carries_success_flag() {
        let (status, body) = body_of(AppError::InvalidCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "invalid_credentials" })
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let (status, body) = body_of(AppError::HashingFailed("salt too short".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "hash_error" }));

        let (_, body) = body_of(AppError::Database(DbErr::Custom("boom".into()))).await;
        assert_eq!(body, serde_json::json!({ "error": "db_error" }));
    }

    #[test]
    fn test_validation_codes() {
        assert_eq!(AppError::BadRequest("eof".into()).code(), "invalid_body");
        assert_eq!(AppError::missing_fields("email").code(), "missing_fields");
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_non_unique_insert_error_stays_database_error() {
        let err = AppError::from_insert(DbErr::Custom("disk full".into()), "email");
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(7).ok_or_not_found().unwrap(), 7);
    }
}
