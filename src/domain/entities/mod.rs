//! # Domain Entities
//!
//! - **Course**: a named record with a server-assigned identifier
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer.

mod course;

pub use course::{
    normalize_name, Course, CourseFilter, CourseNameError, CoursePatch, CourseRepository,
    NewCourse, MAX_COURSE_NAME_LENGTH,
};

#[cfg(test)]
pub use course::MockCourseRepository;
