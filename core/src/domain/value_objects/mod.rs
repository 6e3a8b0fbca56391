//! Value objects: remote account views and verification request/report types.

pub mod membership;
pub mod verification;

pub use membership::{AccountSearch, AccountSummary, MembershipAccount};
pub use verification::{
    MessageKey, Severity, VerificationReport, VerificationRequest, VerificationStatus,
};
