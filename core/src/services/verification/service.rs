//! Main verification service implementation

use std::sync::Arc;

use mc_shared::utils::{mask_phone_number, normalize_tr_phone};
use mc_shared::RateLimitConfig;

use crate::domain::value_objects::{VerificationReport, VerificationRequest};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AttemptRepository;
use crate::services::audit::AttemptLogger;
use crate::services::lookup::{BackofficeClient, LookupOutcome, MembershipLookupService};
use crate::services::rate_limit::{DailyRateLimiter, RateLimitDecision};

/// Address recorded when the caller's address cannot be determined
const UNKNOWN_IP: &str = "unknown";

/// Orchestrates one membership check
pub struct VerificationService<R, B>
where
    R: AttemptRepository,
    B: BackofficeClient,
{
    backoffice: Arc<B>,
    rate_limiter: DailyRateLimiter<R>,
    lookup: MembershipLookupService<B>,
    logger: AttemptLogger<R>,
}

impl<R, B> VerificationService<R, B>
where
    R: AttemptRepository,
    B: BackofficeClient,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `attempts` - Attempt log, shared by the rate limiter and the logger
    /// * `backoffice` - Remote account API
    /// * `rate_limit` - Daily ceiling and day boundary
    pub fn new(attempts: Arc<R>, backoffice: Arc<B>, rate_limit: RateLimitConfig) -> Self {
        Self {
            rate_limiter: DailyRateLimiter::new(Arc::clone(&attempts), rate_limit),
            lookup: MembershipLookupService::new(Arc::clone(&backoffice)),
            logger: AttemptLogger::new(attempts),
            backoffice,
        }
    }

    /// Run one verification
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationReport)` - Any outcome past validation, already logged
    /// * `Err(DomainError::Configuration)` - Backoffice credentials missing
    /// * `Err(DomainError::Validation)` - Empty login or unusable phone
    pub async fn verify(&self, request: VerificationRequest) -> DomainResult<VerificationReport> {
        self.ensure_configured()?;

        let login = request.login.trim();
        if login.is_empty() {
            return Err(DomainError::validation("login is required"));
        }
        let phone = normalize_tr_phone(&request.phone).ok_or_else(|| {
            DomainError::validation("phone must be a Turkish mobile number (90XXXXXXXXXX)")
        })?;

        let ip_address = match request.client_ip.trim() {
            "" => UNKNOWN_IP,
            ip => ip,
        };

        match self.rate_limiter.check(ip_address).await {
            Ok(RateLimitDecision::Blocked { .. }) => {
                return Ok(self
                    .finish(login, &phone, ip_address, VerificationReport::blocked())
                    .await);
            }
            Ok(RateLimitDecision::Allowed { remaining, .. }) => {
                tracing::debug!(
                    ip_address = ip_address,
                    remaining = remaining,
                    "Rate limit check passed"
                );
            }
            Err(e) => {
                tracing::error!(
                    ip_address = ip_address,
                    error = %e,
                    event = "rate_limit_check_failed",
                    "Failed to count today's attempts"
                );
                return Ok(self
                    .finish(login, &phone, ip_address, VerificationReport::internal_error())
                    .await);
            }
        }

        let report = match self.lookup.lookup(login, &phone).await {
            LookupOutcome::Match => VerificationReport::matched(),
            LookupOutcome::Mismatch => VerificationReport::mismatched(),
            LookupOutcome::PhoneUnavailable => VerificationReport::phone_unavailable(),
            LookupOutcome::NotFound => VerificationReport::not_found(),
            LookupOutcome::Ambiguous => VerificationReport::ambiguous(),
            LookupOutcome::Failed(e) => {
                tracing::warn!(
                    step = %e.step(),
                    error = %e,
                    event = "backoffice_failed",
                    "Backoffice lookup failed"
                );
                VerificationReport::upstream_failure(e.outcome())
            }
        };

        Ok(self.finish(login, &phone, ip_address, report).await)
    }

    /// Fail fast when the backoffice credentials are missing
    ///
    /// Checked by `verify`, and by callers that must answer before reading
    /// the request.
    pub fn ensure_configured(&self) -> DomainResult<()> {
        if self.backoffice.is_configured() {
            return Ok(());
        }

        tracing::error!(
            event = "backoffice_not_configured",
            "Backoffice API key is missing"
        );
        Err(DomainError::Configuration {
            message: "backoffice API key missing".to_string(),
        })
    }

    /// Record the attempt and emit the per-request outcome line
    async fn finish(
        &self,
        login: &str,
        phone: &str,
        ip_address: &str,
        report: VerificationReport,
    ) -> VerificationReport {
        self.logger
            .record(login, phone, ip_address, report.outcome)
            .await;

        tracing::info!(
            outcome = %report.outcome,
            status = %report.status,
            ip_address = ip_address,
            phone = %mask_phone_number(phone),
            event = "membership_check",
            "Membership check completed"
        );

        report
    }
}
