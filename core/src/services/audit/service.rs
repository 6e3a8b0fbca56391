//! Append-only writer for verification attempts.
//!
//! Writes are awaited so each request's record lands before its response,
//! but a failed write never changes the response that was already decided.

use std::sync::Arc;

use mc_shared::utils::mask_phone_number;

use crate::domain::entities::{AttemptOutcome, NewVerificationAttempt, VerificationAttempt};
use crate::repositories::AttemptRepository;

/// Records verification outcomes through an [`AttemptRepository`]
pub struct AttemptLogger<R>
where
    R: AttemptRepository,
{
    repository: Arc<R>,
}

impl<R> AttemptLogger<R>
where
    R: AttemptRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Append one attempt
    ///
    /// # Returns
    /// * `Some(row)` once stored
    /// * `None` if the store rejected the write (logged at `warn`)
    pub async fn record(
        &self,
        login: &str,
        phone: &str,
        ip_address: &str,
        outcome: AttemptOutcome,
    ) -> Option<VerificationAttempt> {
        let attempt = NewVerificationAttempt::new(login, phone, ip_address, outcome);

        match self.repository.insert(&attempt).await {
            Ok(stored) => {
                tracing::debug!(
                    attempt_id = stored.id,
                    outcome = %outcome,
                    "Recorded verification attempt"
                );
                Some(stored)
            }
            Err(e) => {
                tracing::warn!(
                    outcome = %outcome,
                    ip_address = ip_address,
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "attempt_log_failed",
                    "Failed to record verification attempt"
                );
                None
            }
        }
    }
}

impl<R> Clone for AttemptLogger<R>
where
    R: AttemptRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
