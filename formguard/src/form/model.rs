use super::ValueListener;
use crate::validation::ReasonSet;
use crate::value::FieldValue;

/// What the engine needs from a form model.
///
/// Every method addressing a field by name must tolerate unknown names:
/// fields may disappear between scheduling and running a reconciliation pass.
pub trait FormModel {
    /// Names of the fields in the current value snapshot, in form order.
    fn field_names(&self) -> Vec<String>;

    /// Whether a live control exists for `name`.
    fn has_control(&self, name: &str) -> bool;

    fn value(&self, name: &str) -> Option<&FieldValue>;

    /// Whether the user (or a forced pass) has touched the field.
    /// Unknown fields are never dirty.
    fn is_dirty(&self, name: &str) -> bool;

    /// Force the field dirty. Returns `false` for unknown fields.
    fn mark_as_dirty(&mut self, name: &str) -> bool;

    /// Live failure reasons of the field, or `None` for unknown fields.
    fn errors(&self, name: &str) -> Option<ReasonSet>;

    /// Listen to the field's value changes for as long as the control lives.
    /// Returns `false` (dropping the listener) for unknown fields.
    fn subscribe(&mut self, name: &str, listener: ValueListener) -> bool;
}
