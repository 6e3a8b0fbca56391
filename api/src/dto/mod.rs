pub mod membership;

pub use membership::{MembershipCheckRequest, MembershipCheckResponse};
