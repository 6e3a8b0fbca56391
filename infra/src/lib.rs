//! # Infrastructure Layer
//!
//! Concrete implementations of the seams defined in `mc_core`:
//!
//! - **Database**: PostgreSQL attempt log using SQLx
//! - **Backoffice**: reqwest client for the remote account-management API

// Re-export core types for convenience
pub use mc_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Backoffice module - remote account API client
pub mod backoffice;

pub use backoffice::HttpBackofficeClient;
pub use database::{DatabasePool, PgAttemptRepository};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
