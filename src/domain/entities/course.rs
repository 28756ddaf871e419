//! Course entity and repository trait.
//!
//! Maps to the `courses` table in the database schema.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Longest accepted course name, in characters.
pub const MAX_COURSE_NAME_LENGTH: usize = 255;

/// Represents a course.
///
/// Maps to the `courses` table:
/// - id: BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY
/// - name: TEXT NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier, never reused
    pub id: i64,

    /// Display name, trimmed and non-blank
    pub name: String,
}

/// Fields for a course that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
}

/// Changes to apply to a stored course. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePatch {
    pub name: Option<String>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    /// Apply the patch in place.
    pub fn apply(&self, course: &mut Course) {
        if let Some(name) = &self.name {
            course.name = name.clone();
        }
    }
}

/// Exact-match filters for listing courses. All set fields must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CourseFilter {
    pub fn matches(&self, course: &Course) -> bool {
        self.id.map_or(true, |id| course.id == id)
            && self.name.as_deref().map_or(true, |name| course.name == name)
    }
}

/// Reasons a course name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseNameError {
    #[error("This field may not be blank.")]
    Blank,

    #[error("Ensure this field has no more than {} characters.", MAX_COURSE_NAME_LENGTH)]
    TooLong,
}

impl CourseNameError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            CourseNameError::Blank => "blank",
            CourseNameError::TooLong => "max_length",
        }
    }
}

/// Normalize a course name: trim surrounding whitespace, then check that
/// something is left and that it fits.
pub fn normalize_name(raw: &str) -> Result<String, CourseNameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CourseNameError::Blank);
    }
    if name.chars().count() > MAX_COURSE_NAME_LENGTH {
        return Err(CourseNameError::TooLong);
    }
    Ok(name.to_string())
}

/// Repository trait for Course data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Short name of the backing store, used in logs and metrics.
    fn backend(&self) -> &'static str;

    /// List courses matching the filter, ordered by id.
    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError>;

    /// Find a course by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Store a new course and return it with its assigned id.
    async fn create(&self, course: &NewCourse) -> Result<Course, AppError>;

    /// Apply a patch atomically. Returns `None` if no course has that id.
    async fn update(&self, id: i64, patch: &CoursePatch) -> Result<Option<Course>, AppError>;

    /// Delete a course. Returns `false` if no course had that id.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
