//! Verification attempt entity: one immutable audit row per checked request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome tag stored with every attempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// Registered phone equals the submitted phone
    Match,
    /// Registered phone differs, or no usable phone on the account
    Mismatch,
    /// No account for the login
    NotFound,
    /// More than one account for the login
    Ambiguous,
    /// Rejected by the daily limit before any remote call
    BlockedLimit,
    /// Backoffice unreachable or answered with a non-success status
    ErrorHttp,
    /// Backoffice body could not be decoded
    ErrorParse,
    /// Backoffice payload carried its error flag
    ErrorFlag,
    /// Failure inside this service
    ErrorInternal,
}

impl AttemptOutcome {
    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::NotFound => "not_found",
            Self::Ambiguous => "ambiguous",
            Self::BlockedLimit => "blocked_limit",
            Self::ErrorHttp => "error_http",
            Self::ErrorParse => "error_parse",
            Self::ErrorFlag => "error_flag",
            Self::ErrorInternal => "error_internal",
        }
    }

    /// Whether this tag is one of the `error_*` subcategories
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::ErrorHttp | Self::ErrorParse | Self::ErrorFlag | Self::ErrorInternal
        )
    }
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttemptOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match" => Ok(Self::Match),
            "mismatch" => Ok(Self::Mismatch),
            "not_found" => Ok(Self::NotFound),
            "ambiguous" => Ok(Self::Ambiguous),
            "blocked_limit" => Ok(Self::BlockedLimit),
            "error_http" => Ok(Self::ErrorHttp),
            "error_parse" => Ok(Self::ErrorParse),
            "error_flag" => Ok(Self::ErrorFlag),
            "error_internal" => Ok(Self::ErrorInternal),
            other => Err(format!("Unknown attempt outcome: {}", other)),
        }
    }
}

/// A stored attempt, as read back from the log table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationAttempt {
    /// Server-assigned, increasing per insert
    pub id: i64,

    /// Login as submitted (trimmed)
    pub login: String,

    /// Normalized phone (`90XXXXXXXXXX`)
    pub phone: String,

    /// Client address used for rate limiting
    pub ip_address: String,

    pub outcome: AttemptOutcome,

    /// Server-assigned insert time
    pub created_at: DateTime<Utc>,
}

/// An attempt about to be appended; id and timestamp come from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVerificationAttempt {
    pub login: String,
    pub phone: String,
    pub ip_address: String,
    pub outcome: AttemptOutcome,
}

impl NewVerificationAttempt {
    pub fn new(
        login: impl Into<String>,
        phone: impl Into<String>,
        ip_address: impl Into<String>,
        outcome: AttemptOutcome,
    ) -> Self {
        Self {
            login: login.into(),
            phone: phone.into(),
            ip_address: ip_address.into(),
            outcome,
        }
    }
}
