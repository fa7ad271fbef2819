use formguard::translate::{custom_translations_from_json, DEFAULT_INVALID_MESSAGE};
use formguard::validation::{Reason, ReasonSet};
use formguard::{resolve_message, ConfigError, Language, Translations};

fn reasons(names: &[&str]) -> ReasonSet {
    names.iter().map(|n| Reason::from_name(n)).collect()
}

// ============================================================================
// Priority
// ============================================================================

#[test]
fn test_required_wins_regardless_of_order() {
    let table = Translations::for_language(Language::EnUs);
    assert_eq!(
        resolve_message(&reasons(&["maxlength", "required"]), &table),
        "Required field"
    );
    assert_eq!(
        resolve_message(&reasons(&["required", "maxlength"]), &table),
        "Required field"
    );
}

#[test]
fn test_white_space_beats_other_reasons() {
    let table = Translations::for_language(Language::EnUs);
    assert_eq!(
        resolve_message(&reasons(&["minlength", "whiteSpaceLine"]), &table),
        "No leading spaces"
    );
}

#[test]
fn test_builtin_reasons_beat_custom_ones() {
    let table = Translations::for_language(Language::EnUs).with_overrides([("tooOld", "Too old")]);
    assert_eq!(
        resolve_message(&reasons(&["tooOld", "valueNoExist"]), &table),
        "Value not in list"
    );
}

#[test]
fn test_silent_reason_only_wins_alone() {
    let table = Translations::for_language(Language::EnUs);
    assert_eq!(resolve_message(&reasons(&["withoutMessage"]), &table), "");
    assert_eq!(
        resolve_message(&reasons(&["withoutMessage", "number"]), &table),
        "Must be a number"
    );
}

#[test]
fn test_silent_reason_needs_no_table_entry() {
    let table = Translations::from_entries(Language::EnUs, [("required", "Required")]);
    assert_eq!(resolve_message(&reasons(&["withoutMessage"]), &table), "");
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn test_missing_key_uses_table_invalid_message() {
    let table = Translations::from_entries(Language::EnUs, [("invalid", "Nope")]);
    assert_eq!(resolve_message(&reasons(&["pattern"]), &table), "Nope");
}

#[test]
fn test_missing_key_without_invalid_entry() {
    let table = Translations::from_entries(Language::EnUs, [("required", "Required")]);
    assert_eq!(
        resolve_message(&reasons(&["pattern"]), &table),
        DEFAULT_INVALID_MESSAGE
    );
}

// ============================================================================
// Tables
// ============================================================================

#[test]
fn test_language_codes() {
    assert_eq!(Language::from_code("es_ES"), Language::EsEs);
    assert_eq!(Language::from_code("en_US"), Language::EnUs);
    assert_eq!(Language::from_code("fr_FR"), Language::EnUs);
    assert_eq!(Language::EsEs.code(), "es_ES");
}

#[test]
fn test_spanish_table() {
    let table = Translations::for_code("es_ES");
    assert_eq!(table.language(), Language::EsEs);
    assert_eq!(table.get("required"), Some("Campo obligatorio"));
    assert_eq!(table.get("maxLengthWarning"), Some("Límite alcanzado"));
}

#[test]
fn test_overrides_win() {
    let table = Translations::for_language(Language::EnUs)
        .with_overrides([("number", "Digits only"), ("tooOld", "Too old")]);
    assert_eq!(table.get("number"), Some("Digits only"));
    assert_eq!(table.get("tooOld"), Some("Too old"));
    assert_eq!(table.get("email"), Some("Invalid email"));
}

#[test]
fn test_json_overrides() {
    let table = Translations::for_language(Language::EsEs)
        .with_json_overrides(r#"{"number": "Solo dígitos"}"#)
        .unwrap();
    assert_eq!(table.get("number"), Some("Solo dígitos"));
}

#[test]
fn test_json_overrides_must_be_flat_strings() {
    let err = custom_translations_from_json(r#"{"number": 1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Translations(_)));
}
