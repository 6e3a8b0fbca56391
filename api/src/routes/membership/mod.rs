pub mod check;

use std::sync::Arc;

use mc_core::{AttemptRepository, BackofficeClient, VerificationService};

pub use check::{check_membership, method_not_allowed};

/// Shared state for the membership routes
pub struct AppState<R, B>
where
    R: AttemptRepository,
    B: BackofficeClient,
{
    pub verification_service: Arc<VerificationService<R, B>>,
}

impl<R, B> AppState<R, B>
where
    R: AttemptRepository,
    B: BackofficeClient,
{
    pub fn new(verification_service: VerificationService<R, B>) -> Self {
        Self {
            verification_service: Arc::new(verification_service),
        }
    }
}

impl<R, B> Clone for AppState<R, B>
where
    R: AttemptRepository,
    B: BackofficeClient,
{
    fn clone(&self) -> Self {
        Self {
            verification_service: Arc::clone(&self.verification_service),
        }
    }
}
