use std::collections::HashMap;

use super::Language;
use crate::config::ConfigError;

/// Message used when neither the table nor its `invalid` entry can help.
pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid value";

/// Key of the table's own generic invalid-value message.
const INVALID_KEY: &str = "invalid";

/// An immutable key → message table for one language.
///
/// Built from a language's built-in strings with optional overrides merged on
/// top; an override always replaces the built-in entry. Tables are plain
/// values, passed explicitly to whatever needs to render messages.
///
/// # Example
///
/// ```
/// use formguard::translate::{Language, Translations};
///
/// let table = Translations::for_language(Language::EsEs)
///     .with_overrides([("required", "Obligatorio")]);
///
/// assert_eq!(table.get("required"), Some("Obligatorio"));
/// assert_eq!(table.get("number"), Some("Debe ser un número"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    language: Language,
    entries: HashMap<String, String>,
}

impl Translations {
    /// The built-in table of `language`.
    pub fn for_language(language: Language) -> Self {
        let entries = language
            .strings()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { language, entries }
    }

    /// A table holding exactly `entries`, without any built-in strings.
    pub fn from_entries<I, K, V>(language: Language, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            language,
            entries: HashMap::new(),
        }
        .with_overrides(entries)
    }

    /// The built-in table for a language code, falling back to `en_US`.
    pub fn for_code(code: &str) -> Self {
        Self::for_language(Language::from_code(code))
    }

    /// Merge overrides on top of the current entries.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.entries
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Merge overrides given as a flat JSON object of strings.
    pub fn with_json_overrides(self, json: &str) -> Result<Self, ConfigError> {
        let overrides = custom_translations_from_json(json)?;
        Ok(self.with_overrides(overrides))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The message for `key`, or the generic invalid-value message.
    pub fn message(&self, key: &str) -> &str {
        self.get(key).unwrap_or_else(|| self.invalid_message())
    }

    /// The table's generic invalid-value message.
    pub fn invalid_message(&self) -> &str {
        self.get(INVALID_KEY).unwrap_or(DEFAULT_INVALID_MESSAGE)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

/// Parse custom translations from a flat JSON object (`{"key": "message"}`).
pub fn custom_translations_from_json(json: &str) -> Result<HashMap<String, String>, ConfigError> {
    serde_json::from_str(json).map_err(ConfigError::Translations)
}
