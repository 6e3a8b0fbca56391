//! Request and report types of the verification pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::AttemptOutcome;

/// Raw input of one membership check, as received from the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub login: String,
    pub phone: String,
    pub client_ip: String,
}

impl VerificationRequest {
    pub fn new(
        login: impl Into<String>,
        phone: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            phone: phone.into(),
            client_ip: client_ip.into(),
        }
    }
}

/// Status tag returned to the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Match,
    Mismatch,
    NotFound,
    Ambiguous,
    Error,
    BlockedLimit,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::NotFound => "not_found",
            Self::Ambiguous => "ambiguous",
            Self::Error => "error",
            Self::BlockedLimit => "blocked_limit",
        }
    }
}

impl From<AttemptOutcome> for VerificationStatus {
    fn from(outcome: AttemptOutcome) -> Self {
        match outcome {
            AttemptOutcome::Match => Self::Match,
            AttemptOutcome::Mismatch => Self::Mismatch,
            AttemptOutcome::NotFound => Self::NotFound,
            AttemptOutcome::Ambiguous => Self::Ambiguous,
            AttemptOutcome::BlockedLimit => Self::BlockedLimit,
            AttemptOutcome::ErrorHttp
            | AttemptOutcome::ErrorParse
            | AttemptOutcome::ErrorFlag
            | AttemptOutcome::ErrorInternal => Self::Error,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key into the localized message catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Match,
    Mismatch,
    PhoneUnavailable,
    NotFound,
    Ambiguous,
    RateLimited,
    UpstreamFailure,
    InternalError,
    InvalidInput,
    MalformedBody,
    Misconfigured,
    MethodNotAllowed,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Mismatch => "mismatch",
            Self::PhoneUnavailable => "phone_unavailable",
            Self::NotFound => "not_found",
            Self::Ambiguous => "ambiguous",
            Self::RateLimited => "rate_limited",
            Self::UpstreamFailure => "upstream_failure",
            Self::InternalError => "internal_error",
            Self::InvalidInput => "invalid_input",
            Self::MalformedBody => "malformed_body",
            Self::Misconfigured => "misconfigured",
            Self::MethodNotAllowed => "method_not_allowed",
        }
    }
}

/// How a report should be surfaced over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Business outcome (200)
    Ok,
    /// Daily ceiling reached (429)
    RateLimited,
    /// Backoffice failure (502)
    Upstream,
    /// Failure inside this service (500)
    Internal,
}

/// Final result of a verification that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub status: VerificationStatus,
    /// Tag written to the attempt log
    pub outcome: AttemptOutcome,
    pub message_key: MessageKey,
    pub severity: Severity,
}

impl VerificationReport {
    pub fn matched() -> Self {
        Self::business(AttemptOutcome::Match, MessageKey::Match)
    }

    pub fn mismatched() -> Self {
        Self::business(AttemptOutcome::Mismatch, MessageKey::Mismatch)
    }

    /// Account exists but carries no usable phone
    pub fn phone_unavailable() -> Self {
        Self::business(AttemptOutcome::Mismatch, MessageKey::PhoneUnavailable)
    }

    pub fn not_found() -> Self {
        Self::business(AttemptOutcome::NotFound, MessageKey::NotFound)
    }

    pub fn ambiguous() -> Self {
        Self::business(AttemptOutcome::Ambiguous, MessageKey::Ambiguous)
    }

    pub fn blocked() -> Self {
        Self {
            status: VerificationStatus::BlockedLimit,
            outcome: AttemptOutcome::BlockedLimit,
            message_key: MessageKey::RateLimited,
            severity: Severity::RateLimited,
        }
    }

    /// Backoffice failure; `outcome` must be one of the upstream error tags
    pub fn upstream_failure(outcome: AttemptOutcome) -> Self {
        Self {
            status: VerificationStatus::Error,
            outcome,
            message_key: MessageKey::UpstreamFailure,
            severity: Severity::Upstream,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: VerificationStatus::Error,
            outcome: AttemptOutcome::ErrorInternal,
            message_key: MessageKey::InternalError,
            severity: Severity::Internal,
        }
    }

    fn business(outcome: AttemptOutcome, message_key: MessageKey) -> Self {
        Self {
            status: outcome.into(),
            outcome,
            message_key,
            severity: Severity::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_tags_collapse_to_error_status() {
        for outcome in [
            AttemptOutcome::ErrorHttp,
            AttemptOutcome::ErrorParse,
            AttemptOutcome::ErrorFlag,
            AttemptOutcome::ErrorInternal,
        ] {
            assert_eq!(VerificationStatus::from(outcome), VerificationStatus::Error);
        }
        assert_eq!(
            VerificationStatus::from(AttemptOutcome::BlockedLimit),
            VerificationStatus::BlockedLimit
        );
    }

    #[test]
    fn test_phone_unavailable_is_a_mismatch() {
        let report = VerificationReport::phone_unavailable();
        assert_eq!(report.status, VerificationStatus::Mismatch);
        assert_eq!(report.outcome, AttemptOutcome::Mismatch);
        assert_eq!(report.message_key, MessageKey::PhoneUnavailable);
        assert_eq!(report.severity, Severity::Ok);
    }

    #[test]
    fn test_upstream_failure_keeps_subcategory() {
        let report = VerificationReport::upstream_failure(AttemptOutcome::ErrorParse);
        assert_eq!(report.status.as_str(), "error");
        assert_eq!(report.outcome.as_str(), "error_parse");
        assert_eq!(report.severity, Severity::Upstream);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&VerificationStatus::BlockedLimit).unwrap();
        assert_eq!(json, "\"blocked_limit\"");
    }
}
