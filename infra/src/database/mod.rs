//! Database module - PostgreSQL implementations using SQLx
//!
//! - Connection pool management
//! - Attempt log repository

pub mod connection;
pub mod postgres;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::PgAttemptRepository;
