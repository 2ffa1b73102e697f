//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has been deserialized and validated.
///
/// A body that cannot be parsed is rejected with `invalid_body`; a body whose
/// fields fail validation is rejected with `missing_fields`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct LoginRequest {
///     #[serde(default)]
///     #[validate(length(min = 1))]
///     email: String,
/// }
///
/// async fn login(ValidatedJson(payload): ValidatedJson<LoginRequest>) {
///     // payload.email is non-empty here
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::missing_fields(invalid_fields(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Comma-separated, sorted names of the fields that failed validation
fn invalid_fields(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort_unstable();
    fields.join(", ")
}
