//! Localized user-facing messages.
//!
//! The catalog is embedded at compile time from `i18n/messages.toml`.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use mc_core::MessageKey;
pub use mc_shared::Language;

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedMessage {
    pub tr: String,
    pub en: String,
}

impl LocalizedMessage {
    pub fn in_language(&self, lang: Language) -> &str {
        match lang {
            Language::Turkish => &self.tr,
            Language::English => &self.en,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageCatalog {
    pub messages: HashMap<String, LocalizedMessage>,
}

pub static MESSAGES: Lazy<MessageCatalog> = Lazy::new(|| {
    load_messages().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to parse embedded message catalog");
        MessageCatalog::default()
    })
});

fn load_messages() -> Result<MessageCatalog, toml::de::Error> {
    toml::from_str(include_str!("../../i18n/messages.toml"))
}

/// Message for `key` in `lang`; a missing entry yields the key itself
pub fn message(key: MessageKey, lang: Language) -> String {
    MESSAGES
        .messages
        .get(key.as_str())
        .map(|m| m.in_language(lang).to_string())
        .unwrap_or_else(|| key.as_str().to_string())
}
