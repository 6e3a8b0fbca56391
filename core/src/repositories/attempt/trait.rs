//! Attempt log repository trait: the append-only store behind the logger and
//! the rate limiter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{AttemptOutcome, NewVerificationAttempt, VerificationAttempt};
use crate::errors::DomainError;

/// Persistence contract for verification attempts
///
/// Rows are only ever appended. No implementation may update or delete.
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Append one attempt
    ///
    /// # Returns
    /// * The stored row with its server-assigned id and timestamp
    async fn insert(
        &self,
        attempt: &NewVerificationAttempt,
    ) -> Result<VerificationAttempt, DomainError>;

    /// Count attempts from `ip_address` created at or after `since`,
    /// ignoring rows tagged `excluding`
    async fn count_since(
        &self,
        ip_address: &str,
        since: DateTime<Utc>,
        excluding: AttemptOutcome,
    ) -> Result<u64, DomainError>;
}
