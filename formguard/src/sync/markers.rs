//! Class markers and feedback element naming.

pub const DIRTY: &str = "ng-dirty";
pub const TOUCHED: &str = "ng-touched";
pub const VALID: &str = "ng-valid";
pub const ERROR: &str = "error-field";
pub const OK: &str = "ok-field";

/// Class of inserted error messages.
pub const ERROR_MESSAGE_CLASS: &str = "error-field-message";
/// Class of inserted warning messages.
pub const WARNING_MESSAGE_CLASS: &str = "warning-field";

pub fn error_message_id(field: &str) -> String {
    format!("error-field-message-{field}")
}

pub fn warning_message_id(field: &str) -> String {
    format!("warning-field-message-{field}")
}
