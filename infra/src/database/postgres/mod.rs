//! PostgreSQL repository implementations

pub mod attempt_repository_impl;

pub use attempt_repository_impl::PgAttemptRepository;
