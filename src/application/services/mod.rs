//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CourseService**: Course CRUD operations

pub mod course_service;

pub use course_service::{
    CourseError, CourseService, CourseServiceImpl, CreateCourseDto, UpdateCourseDto,
};
