//! # Domain Layer
//!
//! The domain layer contains the core business rules of the course service.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (Course) and their repository traits
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain rules (name normalization, filtering)

pub mod entities;

// Re-export commonly used types
pub use entities::*;
