//! Attempt log repository module.

mod r#trait;
pub use r#trait::AttemptRepository;

mod mock;
pub use mock::MockAttemptRepository;

#[cfg(test)]
mod tests;
