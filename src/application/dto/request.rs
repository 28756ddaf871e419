//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::domain::{normalize_name, CourseFilter};
use crate::shared::error::AppError;

/// Create or replace course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        required(message = "This field is required."),
        custom(function = "validate_course_name")
    )]
    pub name: Option<String>,
}

/// Partial course update request
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_course_name"))]
    pub name: Option<String>,
}

/// Course list query parameters
///
/// Kept as raw strings so a malformed `id` becomes a field error
/// instead of a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CourseQueryParams {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl CourseQueryParams {
    /// Build the store filter. Empty parameters are ignored.
    pub fn into_filter(self) -> Result<CourseFilter, AppError> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| AppError::field("id", "Enter a number."))?,
            ),
        };
        let name = self.name.filter(|name| !name.is_empty());

        Ok(CourseFilter { id, name })
    }
}

/// Absent fields stay `None`, an explicit `null` is rejected.
fn non_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(serde::de::Error::custom("This field may not be null.")),
    }
}

fn validate_course_name(name: &str) -> Result<(), ValidationError> {
    normalize_name(name).map(|_| ()).map_err(|reason| {
        ValidationError::new(reason.code()).with_message(Cow::Owned(reason.to_string()))
    })
}
