//! Shared utilities and common types for the membership check service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (phone normalization, masking)
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BackofficeConfig, CorsConfig, DatabaseConfig, Environment, LogFormat,
    LoggingConfig, RateLimitConfig, ServerConfig,
};
pub use types::Language;
pub use utils::phone;
