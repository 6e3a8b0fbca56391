//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{AttemptOutcome, NewVerificationAttempt, VerificationAttempt};
pub use value_objects::{
    AccountSearch, AccountSummary, MembershipAccount, MessageKey, Severity, VerificationReport,
    VerificationRequest, VerificationStatus,
};
