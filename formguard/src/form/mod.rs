//! In-memory form model.
//!
//! # Example
//!
//! ```
//! use formguard::form::{Form, FormControl, FormModel};
//! use formguard::validation::{only_number, required, Reason};
//!
//! let mut form = Form::new()
//!     .control("age", FormControl::new("12a").rule(required).rule(only_number));
//!
//! assert!(form.errors("age").unwrap().contains(&Reason::Number));
//! assert!(!form.is_dirty("age"));
//!
//! form.input("age", "12");
//! assert!(form.is_dirty("age"));
//! assert!(form.errors("age").unwrap().is_empty());
//! ```

mod control;
mod model;

use log::trace;

pub use control::{FormControl, ValueListener};
pub use model::FormModel;

use crate::validation::ReasonSet;
use crate::value::FieldValue;

/// An ordered collection of named controls.
#[derive(Debug, Default)]
pub struct Form {
    controls: Vec<(String, FormControl)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control, replacing any control with the same name.
    pub fn control(mut self, name: impl Into<String>, control: FormControl) -> Self {
        self.add_control(name, control);
        self
    }

    pub fn add_control(&mut self, name: impl Into<String>, control: FormControl) {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => *existing = control,
            None => self.controls.push((name, control)),
        }
    }

    pub fn remove_control(&mut self, name: &str) -> Option<FormControl> {
        let pos = self.controls.iter().position(|(n, _)| n == name)?;
        Some(self.controls.remove(pos).1)
    }

    pub fn get(&self, name: &str) -> Option<&FormControl> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Programmatic value change. Listeners fire; the dirty flag is untouched.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.get_mut(name) {
            Some(control) => {
                control.set_value(value);
                true
            }
            None => false,
        }
    }

    /// A user edit: marks the field dirty, then changes the value.
    pub fn input(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.get_mut(name) {
            Some(control) => {
                trace!("input on {name}");
                control.mark_as_dirty();
                control.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Snapshot of every field's value, in form order.
    pub fn values(&self) -> Vec<(&str, &FieldValue)> {
        self.controls
            .iter()
            .map(|(n, c)| (n.as_str(), c.value()))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(|(_, c)| c.is_valid())
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl FormModel for Form {
    fn field_names(&self) -> Vec<String> {
        self.controls.iter().map(|(n, _)| n.clone()).collect()
    }

    fn has_control(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn value(&self, name: &str) -> Option<&FieldValue> {
        self.get(name).map(FormControl::value)
    }

    fn is_dirty(&self, name: &str) -> bool {
        self.get(name).is_some_and(FormControl::is_dirty)
    }

    fn mark_as_dirty(&mut self, name: &str) -> bool {
        match self.get_mut(name) {
            Some(control) => {
                control.mark_as_dirty();
                true
            }
            None => false,
        }
    }

    fn errors(&self, name: &str) -> Option<ReasonSet> {
        self.get(name).map(FormControl::errors)
    }

    fn subscribe(&mut self, name: &str, listener: ValueListener) -> bool {
        match self.get_mut(name) {
            Some(control) => {
                control.subscribe(listener);
                true
            }
            None => false,
        }
    }
}
