//! Language and internationalization types

use serde::{Deserialize, Serialize};

/// Language of user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Pick a language from an Accept-Language header.
    ///
    /// The first listed tag wins; anything that is not English falls back to
    /// Turkish, the language of the support desk.
    pub fn from_accept_language(header: &str) -> Self {
        let first = header
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        if first.starts_with("en") {
            Language::English
        } else {
            Language::Turkish
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Turkish => "tr",
            Language::English => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_accept_language() {
        assert_eq!(Language::from_accept_language("en-US,en;q=0.9"), Language::English);
        assert_eq!(Language::from_accept_language("tr-TR,tr;q=0.9,en;q=0.8"), Language::Turkish);
        assert_eq!(Language::from_accept_language(""), Language::Turkish);
        assert_eq!(Language::from_accept_language("de-DE"), Language::Turkish);
    }

    #[test]
    fn test_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::default().code(), "tr");
    }
}
