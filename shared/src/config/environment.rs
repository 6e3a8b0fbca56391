//! Deployment environment and log output settings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Where the service is running; decides CORS, HSTS and log presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// `ENVIRONMENT`, falling back to development when unset or unknown
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT") {
            Ok(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!("{e}, assuming development");
                Environment::Development
            }),
            Err(_) => Environment::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("unknown ENVIRONMENT {other:?}")),
        }
    }
}

/// Log output settings; `RUST_LOG` still overrides `level` at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Debug-level pretty output locally, JSON lines for the log collector
    /// everywhere else
    pub fn for_environment(env: Environment) -> Self {
        let (level, format) = if env.is_development() {
            ("debug", LogFormat::Pretty)
        } else {
            ("info", LogFormat::Json)
        };

        Self {
            level: level.to_string(),
            format,
        }
    }

    /// Environment preset, with `LOG_FORMAT` overriding the format
    pub fn from_env(env: Environment) -> Self {
        let mut config = Self::for_environment(env);
        if let Ok(raw) = std::env::var("LOG_FORMAT") {
            match raw.parse() {
                Ok(format) => config.format = format,
                Err(e) => tracing::warn!("{e}, keeping {:?}", config.format),
            }
        }
        config
    }

    /// Default filter: the configured level, with sqlx statement noise capped
    pub fn filter_directive(&self) -> String {
        format!("{},sqlx=warn", self.level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            other => Err(format!("unknown LOG_FORMAT {other:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(" Staging ".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!("dev".parse::<Environment>(), Ok(Environment::Development));
        assert!("qa-cluster".parse::<Environment>().is_err());
        assert_eq!(Environment::Production.as_str(), "production");
    }

    #[test]
    fn test_logging_presets() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.format, LogFormat::Pretty);
        assert_eq!(dev.level, "debug");

        let staging = LoggingConfig::for_environment(Environment::Staging);
        assert_eq!(staging.format, LogFormat::Json);
        assert_eq!(staging.level, "info");
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_filter_directive_caps_sqlx() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: LogFormat::Json,
        };
        assert_eq!(config.filter_directive(), "info,sqlx=warn");
    }
}
