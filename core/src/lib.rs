//! # Membership Check Core
//!
//! Core business logic and domain layer for the membership check service.
//! This crate contains domain entities, business services, repository and
//! remote-client interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod mock;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
