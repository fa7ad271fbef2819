//! Validation options.

use serde::Deserialize;
use thiserror::Error;

/// Switches for [`FormValidator::validate_form`](crate::FormValidator::validate_form).
///
/// # Example
///
/// ```
/// use formguard::ValidationOptions;
///
/// let submit = ValidationOptions::new().mark_fields_as_dirty();
/// assert!(submit.mark_fields_as_dirty);
/// assert!(!submit.show_max_length_warning);
///
/// let parsed = ValidationOptions::from_json(r#"{"showMaxLengthWarning": true}"#).unwrap();
/// assert!(parsed.show_max_length_warning);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationOptions {
    /// Force every field dirty up front so all errors show immediately,
    /// without waiting for the user to touch anything.
    ///
    /// Default: false
    pub mark_fields_as_dirty: bool,

    /// Warn when a valid, touched field reaches its declared max length.
    ///
    /// Default: false
    pub show_max_length_warning: bool,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable submit-time mode (see [`ValidationOptions::mark_fields_as_dirty`]).
    pub fn mark_fields_as_dirty(mut self) -> Self {
        self.mark_fields_as_dirty = true;
        self
    }

    /// Enable the max-length warning.
    pub fn show_max_length_warning(mut self) -> Self {
        self.show_max_length_warning = true;
        self
    }

    /// Parse options from a JSON object with camelCase keys.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Options)
    }
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid validation options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("Invalid custom translations: {0}")]
    Translations(#[source] serde_json::Error),
}
