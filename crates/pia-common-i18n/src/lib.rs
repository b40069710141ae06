//! Internationalization support for the PIA toolkit.
//!
//! Lookups never fail: a key missing from every catalog in the fallback
//! chain resolves to the key itself.

pub mod detect;
pub mod format;
pub mod loader;
pub mod translator;

use std::collections::HashMap;

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,    // English (default)
    Fr,    // French
    Es,    // Spanish
    De,    // German
    It,    // Italian
    Ja,    // Japanese
    ZhCn,  // Chinese (Simplified)
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 7] = [
        Self::En,
        Self::Fr,
        Self::Es,
        Self::De,
        Self::It,
        Self::Ja,
        Self::ZhCn,
    ];

    /// Parse from a locale string (e.g., "en-US", "fr_FR.UTF-8").
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.to_lowercase().replace('-', "_");
        let lang = s.split(['_', '.']).next()?;

        match lang {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "es" => Some(Self::Es),
            "de" => Some(Self::De),
            "it" => Some(Self::It),
            "ja" => Some(Self::Ja),
            "zh" => Some(Self::ZhCn),
            _ => None,
        }
    }

    /// Get the language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::De => "de",
            Self::It => "it",
            Self::Ja => "ja",
            Self::ZhCn => "zh_CN",
        }
    }

    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Fr => "Français",
            Self::Es => "Español",
            Self::De => "Deutsch",
            Self::It => "Italiano",
            Self::Ja => "日本語",
            Self::ZhCn => "中文(简体)",
        }
    }

    /// Matching chrono locale for date formatting.
    pub fn chrono_locale(&self) -> chrono::Locale {
        match self {
            Self::En => chrono::Locale::en_US,
            Self::Fr => chrono::Locale::fr_FR,
            Self::Es => chrono::Locale::es_ES,
            Self::De => chrono::Locale::de_DE,
            Self::It => chrono::Locale::it_IT,
            Self::Ja => chrono::Locale::ja_JP,
            Self::ZhCn => chrono::Locale::zh_CN,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::InvalidLocale(s.to_string()))
    }
}

/// Message catalog for a locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a translated message.
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.messages.get(msgid).map(|s| s.as_str())
    }

    /// Add a message.
    pub fn insert(&mut self, msgid: impl Into<String>, msgstr: impl Into<String>) {
        self.messages.insert(msgid.into(), msgstr.into());
    }

    /// Copy every message of `other` into this catalog, overriding duplicates.
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Replace `{name}` placeholders in a template.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut msg = template.to_string();
    for (name, value) in args {
        msg = msg.replace(&format!("{{{name}}}"), value);
    }
    msg
}

/// i18n errors.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("failed to load catalog: {0}")]
    LoadError(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

pub use detect::{detect_locale, detect_locale_with_override, locale_fallback_chain};
pub use format::month_year;
pub use loader::{default_catalog, load_catalog, LoaderConfig};
pub use translator::{CatalogTranslator, Translator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("fr_FR.UTF-8"), Some(Locale::Fr));
        assert_eq!(Locale::parse("it_IT"), Some(Locale::It));
        assert_eq!(Locale::parse("ja_JP"), Some(Locale::Ja));
        assert_eq!(Locale::parse("zh-CN"), Some(Locale::ZhCn));

        assert_eq!(Locale::parse("invalid"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::parse("xx-YY"), None);
    }

    #[test]
    fn test_locale_properties() {
        assert_eq!(Locale::Fr.code(), "fr");
        assert_eq!(Locale::ZhCn.code(), "zh_CN");
        assert_eq!(Locale::It.name(), "Italiano");
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::De.to_string(), "de");
        assert!("klingon".parse::<Locale>().is_err());
    }

    #[test]
    fn test_catalog_basic_operations() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.insert("date.today", "Today");
        assert_eq!(catalog.get("date.today"), Some("Today"));
        assert_eq!(catalog.get("missing"), None);

        let mut other = Catalog::new();
        other.insert("date.today", "Aujourd'hui");
        other.insert("date.yesterday", "Hier");
        catalog.merge(other);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("date.today"), Some("Aujourd'hui"));
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("il y a {count} jours", &[("count", "3")]),
            "il y a 3 jours"
        );
        assert_eq!(interpolate("no placeholder", &[("count", "3")]), "no placeholder");
    }

    #[test]
    fn test_error_types() {
        let error = I18nError::LoadError("test error".to_string());
        assert_eq!(error.to_string(), "failed to load catalog: test error");

        let error = I18nError::InvalidLocale("invalid".to_string());
        assert_eq!(error.to_string(), "invalid locale: invalid");
    }
}
