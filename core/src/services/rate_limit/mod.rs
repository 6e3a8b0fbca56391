//! Per-IP daily rate limiting backed by the attempt log.

mod limiter;

pub use limiter::{DailyRateLimiter, RateLimitDecision};
