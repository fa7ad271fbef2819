//! Message tables.
//!
//! Each [`Translations`] value is self-contained: choosing a language and
//! applying custom overrides produce a new table instead of mutating shared
//! state.

mod catalog;
mod en_us;
mod es_es;
mod language;

pub use catalog::{custom_translations_from_json, Translations, DEFAULT_INVALID_MESSAGE};
pub use language::Language;
