//! Display string lookup for schema titles
//!
//! Language tables are embedded JSON documents keyed by dotted paths
//! (`editor.secondary_info`). Lookups fall back to English, then to the
//! key itself, so a missing translation never fails a schema build.

use log::{debug, warn};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Language used when a key is missing from the requested table
pub const FALLBACK_LANGUAGE: &str = "en";

const EMBEDDED_LANGUAGES: &[(&str, &str)] = &[
    ("en", include_str!("languages/en.json")),
    ("de", include_str!("languages/de.json")),
];

/// Parsed language tables, built on first use
static LANGUAGES: Lazy<HashMap<&'static str, Value>> = Lazy::new(|| {
    EMBEDDED_LANGUAGES
        .iter()
        .filter_map(|(code, source)| match serde_json::from_str::<Value>(source) {
            Ok(table) => Some((*code, table)),
            Err(e) => {
                warn!("Skipping language table '{}': {}", code, e);
                None
            }
        })
        .collect()
});

/// Resolves a localization key to a display string
pub trait Localize {
    fn localize(&self, key: &str) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

/// Lookup against the embedded language tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    language: String,
}

impl Translations {
    /// Accepts tags like `de`, `de-DE` or `de_AT`; only the primary
    /// subtag selects the table.
    pub fn new(language: &str) -> Self {
        let primary = language
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self { language: primary }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether an embedded table exists for this language
    pub fn is_supported(&self) -> bool {
        LANGUAGES.contains_key(self.language.as_str())
    }

    /// Codes of the embedded languages
    pub fn available_languages() -> Vec<&'static str> {
        let mut codes: Vec<&'static str> = LANGUAGES.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }
}

impl Localize for Translations {
    fn localize(&self, key: &str) -> String {
        let found = [self.language.as_str(), FALLBACK_LANGUAGE]
            .iter()
            .filter_map(|code| LANGUAGES.get(code))
            .find_map(|table| lookup(table, key));

        match found {
            Some(text) => text.to_string(),
            None => {
                debug!("Missing translation for '{}' ({})", key, self.language);
                key.to_string()
            }
        }
    }
}

fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(table, |node, segment| node.get(segment))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        let english = Translations::new("en");
        assert_eq!(english.localize("editor.secondary_info"), "Secondary Info");
        assert_eq!(english.localize("editor.tap_action"), "Tap Action");

        let german = Translations::new("de");
        assert_eq!(german.localize("editor.tap_action"), "Tippaktion");
    }

    #[test]
    fn test_region_tags_use_primary_subtag() {
        assert_eq!(Translations::new("de-DE").language(), "de");
        assert_eq!(Translations::new("DE_at").language(), "de");
        assert!(Translations::new("de-CH").is_supported());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let french = Translations::new("fr");
        assert!(!french.is_supported());
        assert_eq!(french.localize("editor.secondary_info"), "Secondary Info");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let english = Translations::default();
        assert_eq!(english.localize("editor.missing"), "editor.missing");
        assert_eq!(english.localize("editor"), "editor");
    }

    #[test]
    fn test_closure_localizer() {
        let upper = |key: &str| key.to_uppercase();
        assert_eq!(upper.localize("editor.tap_action"), "EDITOR.TAP_ACTION");
    }

    #[test]
    fn test_available_languages() {
        assert_eq!(Translations::available_languages(), vec!["de", "en"]);
    }
}
