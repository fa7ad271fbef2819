//! Reconciles one field's visual element with its logical validity.
//!
//! A reconciliation pass never caches anything: it reads the live failure
//! reasons and dirty flag from the form model and the live element from the
//! document, so running it twice in a row leaves the same markers and at most
//! one error and one warning element behind.

mod elements;
pub mod markers;
mod state;

use formdom::{Document, Element};
use log::{debug, trace, warn};

pub use elements::ElementMap;
pub use state::FieldState;

use crate::form::FormModel;
use crate::message::{resolve_message, MAX_LENGTH_WARNING_KEY};
use crate::translate::Translations;
use self::markers::{
    error_message_id, warning_message_id, DIRTY, ERROR, ERROR_MESSAGE_CLASS, OK, TOUCHED, VALID,
    WARNING_MESSAGE_CLASS,
};

/// Runs reconciliation passes for single fields.
#[derive(Debug, Clone, Default)]
pub struct FieldSynchronizer {
    translations: Translations,
    elements: ElementMap,
}

impl FieldSynchronizer {
    pub fn new(translations: Translations) -> Self {
        Self {
            translations,
            elements: ElementMap::default(),
        }
    }

    /// Use explicit field → element bindings instead of matching by name.
    pub fn with_elements(mut self, elements: ElementMap) -> Self {
        self.elements = elements;
        self
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    pub fn elements(&self) -> &ElementMap {
        &self.elements
    }

    /// Bring the visual state of `field` in line with its validity.
    ///
    /// Feedback elements left by earlier passes are always removed first.
    /// Returns `None` without any further change when the field has no live
    /// control, no element, or its element is a composite container.
    pub fn reconcile<F>(
        &self,
        field: &str,
        form: &F,
        doc: &mut Document,
        show_max_length_warning: bool,
    ) -> Option<FieldState>
    where
        F: FormModel + ?Sized,
    {
        let error_id = error_message_id(field);
        let warning_id = warning_message_id(field);
        doc.remove(&error_id);
        doc.remove(&warning_id);

        let Some(reasons) = form.errors(field) else {
            debug!("Skipping {field}: no live control");
            return None;
        };

        let element_id = self.elements.element_id(field);
        let Some(element) = doc.get(element_id) else {
            debug!("Skipping {field}: element #{element_id} not found");
            return None;
        };
        if element.kind.is_composite() {
            trace!("Skipping {field}: #{element_id} is a {}", element.kind.tag());
            return None;
        }

        let reached_max_length = element.max_length == Some(element.value_len())
            && element.has_class(TOUCHED)
            && !element.value.is_empty();
        let parent_id = doc.parent_id(element_id).map(str::to_owned);

        let state = if reasons.is_empty() {
            if show_max_length_warning && reached_max_length {
                let text = self.translations.message(MAX_LENGTH_WARNING_KEY);
                let warning = Element::span(text)
                    .id(warning_id)
                    .class(WARNING_MESSAGE_CLASS);
                append_feedback(doc, parent_id.as_deref(), warning);
            }
            doc.add_classes(element_id, &[OK, VALID, TOUCHED]);
            doc.remove_classes(element_id, &[ERROR]);
            FieldState::Valid
        } else if form.is_dirty(field) {
            let message = resolve_message(&reasons, &self.translations);
            // Silent reasons resolve to an empty message: keep the error
            // markers but insert nothing.
            if !message.is_empty() {
                let error = Element::span(message)
                    .id(error_id)
                    .class(ERROR_MESSAGE_CLASS);
                append_feedback(doc, parent_id.as_deref(), error);
            }
            doc.add_classes(element_id, &[DIRTY, TOUCHED, ERROR]);
            doc.remove_classes(element_id, &[OK]);
            FieldState::InvalidShown
        } else {
            doc.remove_classes(element_id, &[ERROR, OK, VALID, DIRTY, TOUCHED]);
            FieldState::InvalidHidden
        };

        trace!("Reconciled {field}: {state:?}");
        Some(state)
    }
}

fn append_feedback(doc: &mut Document, parent_id: Option<&str>, feedback: Element) {
    let Some(parent_id) = parent_id else {
        debug!("#{} has no parent, feedback not shown", feedback.id);
        return;
    };
    if let Err(e) = doc.append_child(parent_id, feedback) {
        warn!("Failed to insert feedback: {e}");
    }
}
