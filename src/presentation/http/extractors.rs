//! Custom Extractors
//!
//! Axum extractors for request parsing.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::shared::error::AppError;
use crate::shared::validation::validation_error;

/// JSON body that has been deserialized and validated.
///
/// Bodies that are not JSON objects become `AppError::BadRequest`. Fields of
/// the wrong type and failed validation become `AppError::Validation` with
/// per-field detail.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        let value = decode_object::<T>(body)?;
        value.validate().map_err(validation_error)?;

        Ok(Self(value))
    }
}

/// Deserialize a JSON object, reporting type errors against the offending field.
fn decode_object<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest(format!(
            "Expected a JSON object, got {}",
            json_kind(&body)
        )));
    }

    serde_path_to_error::deserialize(body).map_err(|err| {
        let field = err.path().to_string();
        let message = err.into_inner().to_string();
        if field == "." {
            AppError::BadRequest(message)
        } else {
            AppError::field(field, message)
        }
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
