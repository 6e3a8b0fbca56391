//! Rate limiting configuration module

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::env_or;

/// Daily per-IP limit on membership checks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Maximum non-blocked checks per client address per calendar day
    #[serde(default = "default_daily_max")]
    pub daily_max: u32,

    /// Offset from UTC, in minutes, of the timezone whose midnight starts a new day
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            daily_max: default_daily_max(),
            utc_offset_minutes: 0,
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            daily_max: env_or("RATE_LIMIT_DAILY_MAX", default_daily_max()),
            utc_offset_minutes: env_or("RATE_LIMIT_UTC_OFFSET_MINUTES", 0),
        }
    }

    /// Set the day-boundary timezone offset
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Offset as a chrono timezone; out-of-range values fall back to UTC
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60))
            .unwrap_or_else(|| Utc.fix())
    }

    /// Start of the calendar day containing `now`, in UTC
    pub fn day_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let offset = self.offset();
        let local = now.with_timezone(&offset);
        local
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| offset.from_local_datetime(&midnight).single())
            .map(|start| start.with_timezone(&Utc))
            .unwrap_or(now)
    }
}

fn default_daily_max() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling() {
        assert_eq!(RateLimitConfig::default().daily_max, 5);
    }

    #[test]
    fn test_day_start_utc() {
        let config = RateLimitConfig::default();
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 17, 45, 12).unwrap();
        assert_eq!(
            config.day_start(now),
            Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_day_start_with_offset() {
        // UTC+3: 22:30 UTC is already 01:30 the next local day
        let config = RateLimitConfig::default().with_utc_offset_minutes(180);
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 22, 30, 0).unwrap();
        assert_eq!(
            config.day_start(now),
            Utc.with_ymd_and_hms(2025, 3, 14, 21, 0, 0).unwrap()
        );

        let earlier = Utc.with_ymd_and_hms(2025, 3, 14, 20, 59, 59).unwrap();
        assert_eq!(
            config.day_start(earlier),
            Utc.with_ymd_and_hms(2025, 3, 13, 21, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let config = RateLimitConfig::default().with_utc_offset_minutes(100_000);
        assert_eq!(config.offset().local_minus_utc(), 0);
    }
}
