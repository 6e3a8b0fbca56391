//! Domain-specific error types and error handling.
//!
//! Expected business outcomes (`not_found`, `ambiguous`, `mismatch`) are not
//! errors and never appear here; see `domain::value_objects`. Backoffice
//! failures travel as `UpstreamError` inside the lookup outcome.

mod upstream;

pub use upstream::{UpstreamError, UpstreamStep};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Client-correctable input problem
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Server-side configuration is missing or invalid
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Persistence layer failure
    #[error("Repository error: {message}")]
    Repository { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::validation("login is required");
        assert_eq!(err.to_string(), "Validation error: login is required");

        let err = DomainError::repository("connection refused");
        assert!(err.to_string().contains("connection refused"));
    }
}
