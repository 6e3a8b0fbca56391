//! Daily ceiling on verification attempts per client address.
//!
//! The count comes straight from the attempt log: every stored row for the
//! address since the start of the current day, except `blocked_limit` rows.
//! Rejected requests therefore never push the count further, and a client
//! that reached the ceiling stays blocked until the day rolls over.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use mc_shared::RateLimitConfig;

use crate::domain::entities::AttemptOutcome;
use crate::errors::DomainResult;
use crate::repositories::AttemptRepository;

/// Result of a rate-limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Under the ceiling
    Allowed { used: u64, remaining: u64 },
    /// Ceiling reached for today
    Blocked { used: u64, limit: u64 },
}

impl RateLimitDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, RateLimitDecision::Blocked { .. })
    }
}

pub struct DailyRateLimiter<R>
where
    R: AttemptRepository,
{
    repository: Arc<R>,
    config: RateLimitConfig,
}

impl<R> DailyRateLimiter<R>
where
    R: AttemptRepository,
{
    pub fn new(repository: Arc<R>, config: RateLimitConfig) -> Self {
        Self { repository, config }
    }

    pub fn daily_max(&self) -> u64 {
        u64::from(self.config.daily_max)
    }

    /// Check `ip_address` against today's ceiling
    pub async fn check(&self, ip_address: &str) -> DomainResult<RateLimitDecision> {
        self.check_at(ip_address, Utc::now()).await
    }

    /// Same as [`check`](Self::check) with an explicit clock
    pub async fn check_at(
        &self,
        ip_address: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<RateLimitDecision> {
        let since = self.config.day_start(now);
        let used = self
            .repository
            .count_since(ip_address, since, AttemptOutcome::BlockedLimit)
            .await?;
        let limit = self.daily_max();

        if used >= limit {
            tracing::warn!(
                ip_address = ip_address,
                used = used,
                limit = limit,
                event = "rate_limit_exceeded",
                "Daily verification limit reached"
            );
            return Ok(RateLimitDecision::Blocked { used, limit });
        }

        Ok(RateLimitDecision::Allowed {
            used,
            remaining: limit - used,
        })
    }
}
