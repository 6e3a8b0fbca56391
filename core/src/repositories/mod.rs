pub mod attempt;

pub use attempt::{AttemptRepository, MockAttemptRepository};
