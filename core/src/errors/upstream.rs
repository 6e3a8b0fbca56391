//! Failures talking to the backoffice API

use std::fmt;
use thiserror::Error;

use crate::domain::entities::AttemptOutcome;

/// Which backoffice call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamStep {
    /// Account search by login
    GetClients,
    /// Account detail fetch by id
    GetClientById,
}

impl UpstreamStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamStep::GetClients => "GetClients",
            UpstreamStep::GetClientById => "GetClientById",
        }
    }
}

impl fmt::Display for UpstreamStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified backoffice failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// No response: connection refused, DNS, timeout, TLS
    #[error("{step} transport error: {message}")]
    Transport { step: UpstreamStep, message: String },

    /// Response with a non-success HTTP status
    #[error("{step} HTTP {status}: {body}")]
    Status {
        step: UpstreamStep,
        status: u16,
        body: String,
    },

    /// Body could not be decoded
    #[error("{step} JSON parse error: {message}")]
    Parse { step: UpstreamStep, message: String },

    /// Payload carried `HasError: true`
    #[error("{step} returned HasError: {message}")]
    Flagged { step: UpstreamStep, message: String },
}

impl UpstreamError {
    pub fn step(&self) -> UpstreamStep {
        match self {
            UpstreamError::Transport { step, .. }
            | UpstreamError::Status { step, .. }
            | UpstreamError::Parse { step, .. }
            | UpstreamError::Flagged { step, .. } => *step,
        }
    }

    /// Outcome tag recorded for this failure
    pub fn outcome(&self) -> AttemptOutcome {
        match self {
            UpstreamError::Transport { .. } | UpstreamError::Status { .. } => {
                AttemptOutcome::ErrorHttp
            }
            UpstreamError::Parse { .. } => AttemptOutcome::ErrorParse,
            UpstreamError::Flagged { .. } => AttemptOutcome::ErrorFlag,
        }
    }
}
