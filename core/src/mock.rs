//! Test doubles for the two outbound seams, usable from downstream crates.

pub use crate::repositories::attempt::MockAttemptRepository;
pub use crate::services::lookup::MockBackofficeClient;
