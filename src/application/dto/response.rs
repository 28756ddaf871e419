//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::Course;

/// Course response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
        }
    }
}
