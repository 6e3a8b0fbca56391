//! Two-step membership lookup against the backoffice API.

mod mock;
mod service;
mod traits;


pub use mock::MockBackofficeClient;
pub use service::{LookupOutcome, MembershipLookupService};
pub use traits::BackofficeClient;
