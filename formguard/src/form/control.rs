use std::fmt;

use crate::validation::{evaluate, Reason, ReasonSet, Rule, RuleResult};
use crate::value::FieldValue;

/// Callback fired after a control's value changes.
pub type ValueListener = Box<dyn Fn(&FieldValue) + Send + Sync>;

/// One field of a [`Form`](super::Form): a value, its rules and a dirty flag.
#[derive(Default)]
pub struct FormControl {
    value: FieldValue,
    dirty: bool,
    rules: Vec<Rule>,
    listeners: Vec<ValueListener>,
}

impl FormControl {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Add a validation rule.
    pub fn rule<F>(mut self, f: F) -> Self
    where
        F: Fn(&FieldValue) -> RuleResult + Send + Sync + 'static,
    {
        self.rules.push(Box::new(f));
        self
    }

    /// Add an already boxed rule.
    pub fn boxed_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_as_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn mark_as_pristine(&mut self) {
        self.dirty = false;
    }

    /// Re-run the rules against the current value.
    pub fn errors(&self) -> ReasonSet {
        evaluate(&self.rules, &self.value)
    }

    pub fn has_error(&self, reason: &Reason) -> bool {
        self.errors().contains(reason)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Replace the value and notify every listener.
    pub fn set_value(&mut self, value: impl Into<FieldValue>) {
        self.value = value.into();
        for listener in &self.listeners {
            listener(&self.value);
        }
    }

    /// Register a listener for value changes.
    pub fn subscribe(&mut self, listener: ValueListener) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControl")
            .field("value", &self.value)
            .field("dirty", &self.dirty)
            .field("rules", &self.rules.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
