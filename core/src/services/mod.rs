//! Business services containing domain logic and use cases.

pub mod audit;
pub mod lookup;
pub mod rate_limit;
pub mod verification;

// Re-export commonly used types
pub use audit::AttemptLogger;
pub use lookup::{BackofficeClient, LookupOutcome, MembershipLookupService, MockBackofficeClient};
pub use rate_limit::{DailyRateLimiter, RateLimitDecision};
pub use verification::VerificationService;
