use formdom::{Document, Element};
use formguard::orchestrator::ReconcileJob;
use formguard::prelude::*;
use formguard::sync::markers::{ERROR, OK, VALID};

fn signup_page() -> Document {
    Document::new(
        Element::div().id("form").children([
            Element::div()
                .id("age-group")
                .child(Element::input("12a").id("age")),
            Element::div()
                .id("city-group")
                .child(Element::input("Tokyo").id("city")),
        ]),
    )
}

fn signup_form() -> Form {
    Form::new()
        .control("age", FormControl::new("12a").rule(only_number))
        .control(
            "city",
            FormControl::new("Tokyo").rule(introduced_value_exists(["NY", "LN"], Some("none"))),
        )
}

fn validator() -> FormValidator {
    FormValidator::new(Translations::for_language(Language::EnUs))
}

// ============================================================================
// Interactive mode
// ============================================================================

#[test]
fn test_passes_are_deferred() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();

    validator.validate_form(&mut form, ValidationOptions::default());

    assert_eq!(validator.pending(), 2);
    assert_eq!(validator.field_state("age"), FieldState::Untouched);
    assert!(doc.get("age").unwrap().classes.is_empty());

    assert_eq!(validator.run_pending(&mut form, &mut doc), 2);
    assert_eq!(validator.pending(), 0);
}

#[test]
fn test_pristine_errors_stay_hidden_until_edit() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();

    validator.validate_form(&mut form, ValidationOptions::default());
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(validator.field_state("age"), FieldState::InvalidHidden);
    assert!(doc.get("error-field-message-age").is_none());
    assert!(!doc.has_class("age", ERROR));
    assert!(!doc.has_class("age", VALID));

    form.input("age", "12b");
    assert_eq!(validator.pending(), 1);
    assert!(doc.get("error-field-message-age").is_none());

    validator.run_pending(&mut form, &mut doc);
    assert_eq!(validator.field_state("age"), FieldState::InvalidShown);
    assert_eq!(doc.text("error-field-message-age"), Some("Must be a number"));
}

#[test]
fn test_edit_to_valid_value_clears_error() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();
    validator.validate_form(&mut form, ValidationOptions::default());
    validator.run_pending(&mut form, &mut doc);

    form.input("age", "1a");
    validator.run_pending(&mut form, &mut doc);
    form.input("age", "12");
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(validator.field_state("age"), FieldState::Valid);
    assert_eq!(doc.count("error-field-message-age"), 0);
    assert!(doc.has_class("age", OK));
}

#[test]
fn test_fast_double_edit_last_state_wins() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();
    validator.validate_form(&mut form, ValidationOptions::default());
    validator.run_pending(&mut form, &mut doc);

    form.input("age", "1a");
    form.input("age", "12");
    assert_eq!(validator.pending(), 2);

    validator.run_pending(&mut form, &mut doc);
    assert_eq!(validator.field_state("age"), FieldState::Valid);
    assert_eq!(doc.count("error-field-message-age"), 0);
}

#[test]
fn test_silent_failure_is_not_marked_valid() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();
    validator.validate_form(&mut form, ValidationOptions::default());
    validator.run_pending(&mut form, &mut doc);

    form.input("city", "Tokio");
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(validator.field_state("city"), FieldState::InvalidShown);
    assert!(doc.get("error-field-message-city").is_none());
    assert!(!doc.has_class("city", OK));
    assert!(doc.has_class("city", ERROR));
}

#[test]
fn test_removed_field_is_tolerated() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();
    validator.validate_form(&mut form, ValidationOptions::default());

    form.remove_control("age");
    assert_eq!(validator.run_pending(&mut form, &mut doc), 2);
    assert_eq!(validator.field_state("age"), FieldState::Untouched);
    assert_eq!(validator.field_state("city"), FieldState::InvalidHidden);
}

#[test]
fn test_field_without_element_is_skipped() {
    let mut form = signup_form().control("email", FormControl::new("").rule(required));
    let mut doc = signup_page();
    let mut validator = validator();

    validator.validate_form(&mut form, ValidationOptions::default().mark_fields_as_dirty());
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(validator.field_state("email"), FieldState::Untouched);
    assert!(doc.get("error-field-message-email").is_none());
}

// ============================================================================
// Submit mode
// ============================================================================

#[test]
fn test_mark_fields_as_dirty_shows_every_error() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();

    validator.validate_form(&mut form, ValidationOptions::new().mark_fields_as_dirty());
    assert!(!form.is_dirty("age"));

    validator.run_pending(&mut form, &mut doc);

    assert!(form.is_dirty("age"));
    assert_eq!(doc.text("error-field-message-age"), Some("Must be a number"));
    assert_eq!(validator.field_state("city"), FieldState::InvalidShown);
}

#[test]
fn test_mark_fields_as_dirty_does_not_subscribe() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();

    validator.validate_form(&mut form, ValidationOptions::new().mark_fields_as_dirty());
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(form.get("age").unwrap().listener_count(), 0);
    form.input("age", "12");
    assert_eq!(validator.pending(), 0);
}

// ============================================================================
// Max-length warning
// ============================================================================

#[test]
fn test_warning_option_passes_through_to_edits() {
    let mut form = Form::new().control("code", FormControl::new("").rule(max_length(4)));
    let mut doc = Document::new(
        Element::div()
            .id("code-group")
            .child(Element::input("").id("code").max_length(4)),
    );
    let mut validator = validator();

    validator.validate_form(&mut form, ValidationOptions::new().show_max_length_warning());
    validator.run_pending(&mut form, &mut doc);
    assert!(doc.get("warning-field-message-code").is_none());

    doc.set_value("code", "ABCD");
    form.input("code", "ABCD");
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(doc.text("warning-field-message-code"), Some("Limit reached"));
}

// ============================================================================
// Direct use
// ============================================================================

#[test]
fn test_validate_field_runs_immediately() {
    let mut form = signup_form();
    form.mark_as_dirty("age");
    let mut doc = signup_page();
    let mut validator = validator();

    let state = validator.validate_field("age", &form, &mut doc, false);

    assert_eq!(state, Some(FieldState::InvalidShown));
    assert_eq!(validator.field_state("age"), FieldState::InvalidShown);
    assert_eq!(validator.pending(), 0);
}

#[test]
fn test_external_scheduler() {
    let mut form = signup_form();
    let mut doc = signup_page();
    let mut validator = validator();

    validator
        .scheduler()
        .schedule(ReconcileJob::new("age").force_dirty(true));
    validator.run_pending(&mut form, &mut doc);

    assert_eq!(doc.text("error-field-message-age"), Some("Must be a number"));
}
