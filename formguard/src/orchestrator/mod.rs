//! Form-wide validation driver.
//!
//! Reconciliation never runs inside the code path that triggered it. Both
//! [`FormValidator::validate_form`] and value-change notifications only
//! enqueue jobs; [`FormValidator::run_pending`] is the next turn that
//! actually touches the document. A fast double edit enqueues two passes and
//! both run, the last one deciding what stays on screen, since every pass
//! reads live state.

mod queue;

use std::collections::HashMap;

use formdom::Document;
use log::{debug, trace};

pub use queue::{ReconcileJob, ReconcileQueue, Scheduler};

use crate::config::ValidationOptions;
use crate::form::FormModel;
use crate::sync::{ElementMap, FieldState, FieldSynchronizer};
use crate::translate::Translations;
use crate::value::FieldValue;

/// Drives reconciliation for whole forms.
///
/// # Example
///
/// ```
/// use formdom::{Document, Element};
/// use formguard::prelude::*;
///
/// let mut form = Form::new().control("age", FormControl::new("12a").rule(only_number));
/// let mut doc = Document::new(
///     Element::div().id("group").child(Element::input("12a").id("age")),
/// );
///
/// let mut validator = FormValidator::new(Translations::default());
/// validator.validate_form(&mut form, ValidationOptions::new().mark_fields_as_dirty());
/// assert!(doc.get("error-field-message-age").is_none());
///
/// validator.run_pending(&mut form, &mut doc);
/// assert_eq!(doc.text("error-field-message-age"), Some("Must be a number"));
/// ```
#[derive(Debug, Default)]
pub struct FormValidator {
    synchronizer: FieldSynchronizer,
    queue: ReconcileQueue,
    states: HashMap<String, FieldState>,
}

impl FormValidator {
    pub fn new(translations: Translations) -> Self {
        Self {
            synchronizer: FieldSynchronizer::new(translations),
            queue: ReconcileQueue::new(),
            states: HashMap::new(),
        }
    }

    /// Use explicit field → element bindings instead of matching by name.
    pub fn with_elements(mut self, elements: ElementMap) -> Self {
        self.synchronizer = self.synchronizer.with_elements(elements);
        self
    }

    pub fn synchronizer(&self) -> &FieldSynchronizer {
        &self.synchronizer
    }

    /// Handle for scheduling passes from outside.
    pub fn scheduler(&self) -> Scheduler {
        self.queue.scheduler()
    }

    /// Schedule an initial pass for every field of `form`.
    ///
    /// With `mark_fields_as_dirty`, each field is forced dirty right before its
    /// pass so every error shows at once. Otherwise every field is also
    /// subscribed to, and each later value change schedules a fresh pass.
    /// Fields without a live control are skipped.
    pub fn validate_form<F>(&mut self, form: &mut F, options: ValidationOptions)
    where
        F: FormModel + ?Sized,
    {
        for field in form.field_names() {
            self.queue.schedule(
                ReconcileJob::new(field.as_str())
                    .force_dirty(options.mark_fields_as_dirty)
                    .show_max_length_warning(options.show_max_length_warning),
            );

            if options.mark_fields_as_dirty {
                continue;
            }

            let scheduler = self.queue.scheduler();
            let name = field.clone();
            let show = options.show_max_length_warning;
            let subscribed = form.subscribe(
                &field,
                Box::new(move |_value: &FieldValue| {
                    scheduler.schedule(
                        ReconcileJob::new(name.as_str()).show_max_length_warning(show),
                    );
                }),
            );
            if !subscribed {
                debug!("No live control for {field}, not watching changes");
            }
        }
    }

    /// Reconcile one field right now.
    pub fn validate_field<F>(
        &mut self,
        field: &str,
        form: &F,
        doc: &mut Document,
        show_max_length_warning: bool,
    ) -> Option<FieldState>
    where
        F: FormModel + ?Sized,
    {
        let state = self
            .synchronizer
            .reconcile(field, form, doc, show_max_length_warning)?;
        self.states.insert(field.to_string(), state);
        Some(state)
    }

    /// Run the passes queued so far. Returns how many jobs were processed.
    pub fn run_pending<F>(&mut self, form: &mut F, doc: &mut Document) -> usize
    where
        F: FormModel + ?Sized,
    {
        let jobs = self.queue.drain();
        for job in &jobs {
            if job.force_dirty && !form.mark_as_dirty(&job.field) {
                trace!("{} vanished before its pass", job.field);
            }
            self.validate_field(&job.field, &*form, doc, job.show_max_length_warning);
        }
        jobs.len()
    }

    /// Number of passes waiting for [`FormValidator::run_pending`].
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// State left by the latest pass of `field`.
    pub fn field_state(&self, field: &str) -> FieldState {
        self.states.get(field).copied().unwrap_or_default()
    }
}
