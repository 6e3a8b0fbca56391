//! Backoffice API configuration module

use serde::{Deserialize, Serialize};
use std::fmt;

use super::env_or;

/// Default base URL of the account-management API
pub const DEFAULT_API_BASE: &str = "https://backofficewebadmin.betconstruct.com/api/en";

/// Connection settings for the remote account-management API.
///
/// The key is server-side only: it is never serialized and never printed by
/// the `Debug` implementation.
#[derive(Clone, Deserialize, Serialize)]
pub struct BackofficeConfig {
    /// Base URL, without trailing slash
    pub base_url: String,

    /// Value sent in the `Authentication` header
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size requested from the account search endpoint
    #[serde(default = "default_max_rows")]
    pub max_rows: u32,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_rows: default_max_rows(),
        }
    }
}

impl BackofficeConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let base_url = std::env::var("BACKOFFICE_API_BASE")
            .or_else(|_| std::env::var("API_BASE"))
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let api_key = std::env::var("BACKOFFICE_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout_secs: env_or("BACKOFFICE_TIMEOUT_SECS", default_timeout_secs()),
            ..Default::default()
        }
    }

    /// Create a configuration pointing at `base_url` with the given key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Whether a key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for BackofficeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackofficeConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("max_rows", &self.max_rows)
            .finish()
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_rows() -> u32 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_key() {
        let config = BackofficeConfig::new("https://example.test/api/en/", "secret-key");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
        assert_eq!(config.base_url, "https://example.test/api/en");
    }

    #[test]
    fn test_key_is_not_serialized() {
        let config = BackofficeConfig::new("https://example.test", "secret-key");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret-key"));
    }

    #[test]
    fn test_default_has_no_key() {
        let config = BackofficeConfig::default();
        assert!(!config.has_api_key());
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.max_rows, 20);
    }
}
