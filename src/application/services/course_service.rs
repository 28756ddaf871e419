//! Course Service
//!
//! Handles course listing, lookup, creation, update and deletion.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    normalize_name, Course, CourseFilter, CourseNameError, CoursePatch, CourseRepository,
    NewCourse,
};
use crate::shared::error::AppError;

/// Course service trait
#[async_trait]
pub trait CourseService: Send + Sync {
    /// List courses matching the filter
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<Course>, CourseError>;

    /// Get course by ID
    async fn get_course(&self, course_id: i64) -> Result<Course, CourseError>;

    /// Create a new course
    async fn create_course(&self, request: CreateCourseDto) -> Result<Course, CourseError>;

    /// Update the supplied fields of a course
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseDto,
    ) -> Result<Course, CourseError>;

    /// Delete a course
    async fn delete_course(&self, course_id: i64) -> Result<(), CourseError>;
}

/// Create course request
#[derive(Debug, Clone)]
pub struct CreateCourseDto {
    pub name: String,
}

/// Update course request
#[derive(Debug, Clone, Default)]
pub struct UpdateCourseDto {
    pub name: Option<String>,
}

/// Course service errors
#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Course {0} not found")]
    NotFound(i64),

    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: CourseNameError,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for CourseError {
    fn from(err: AppError) -> Self {
        CourseError::Internal(err.to_string())
    }
}

fn checked_name(raw: &str) -> Result<String, CourseError> {
    normalize_name(raw).map_err(|reason| CourseError::Invalid {
        field: "name",
        reason,
    })
}

/// CourseService implementation
pub struct CourseServiceImpl<R>
where
    R: CourseRepository + ?Sized,
{
    course_repo: Arc<R>,
}

impl<R> CourseServiceImpl<R>
where
    R: CourseRepository + ?Sized,
{
    pub fn new(course_repo: Arc<R>) -> Self {
        Self { course_repo }
    }
}

#[async_trait]
impl<R> CourseService for CourseServiceImpl<R>
where
    R: CourseRepository + ?Sized + 'static,
{
    async fn list_courses(&self, filter: CourseFilter) -> Result<Vec<Course>, CourseError> {
        let courses = self.course_repo.list(&filter).await?;
        tracing::debug!(?filter, count = courses.len(), "Listed courses");
        Ok(courses)
    }

    async fn get_course(&self, course_id: i64) -> Result<Course, CourseError> {
        self.course_repo
            .find_by_id(course_id)
            .await?
            .ok_or(CourseError::NotFound(course_id))
    }

    async fn create_course(&self, request: CreateCourseDto) -> Result<Course, CourseError> {
        let course = NewCourse {
            name: checked_name(&request.name)?,
        };

        let created = self.course_repo.create(&course).await?;
        tracing::info!(
            course_id = created.id,
            backend = self.course_repo.backend(),
            "Course created"
        );
        Ok(created)
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseDto,
    ) -> Result<Course, CourseError> {
        let patch = CoursePatch {
            name: update.name.as_deref().map(checked_name).transpose()?,
        };

        if patch.is_empty() {
            return self.get_course(course_id).await;
        }

        let updated = self
            .course_repo
            .update(course_id, &patch)
            .await?
            .ok_or(CourseError::NotFound(course_id))?;
        tracing::info!(course_id, "Course updated");
        Ok(updated)
    }

    async fn delete_course(&self, course_id: i64) -> Result<(), CourseError> {
        if !self.course_repo.delete(course_id).await? {
            return Err(CourseError::NotFound(course_id));
        }
        tracing::info!(course_id, "Course deleted");
        Ok(())
    }
}
