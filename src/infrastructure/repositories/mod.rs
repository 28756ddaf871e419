//! Repository Implementations
//!
//! Implementations of the domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgCourseRepository** - courses stored in PostgreSQL
//! - **InMemoryCourseRepository** - courses held in process memory
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use crate::domain::CourseRepository;
//! use crate::infrastructure::repositories::PgCourseRepository;
//!
//! fn setup_repository(pool: PgPool) -> Arc<dyn CourseRepository> {
//!     Arc::new(PgCourseRepository::new(pool))
//! }
//! ```

pub mod course_repository;
pub mod memory_course_repository;

pub use course_repository::PgCourseRepository;
pub use memory_course_repository::InMemoryCourseRepository;
