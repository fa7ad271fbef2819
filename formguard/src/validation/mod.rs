//! Validation rules and failure reasons.
//!
//! # Example
//!
//! ```
//! use formguard::validation::{introduced_value_exists, only_number, Reason};
//! use formguard::FieldValue;
//!
//! assert!(only_number(&FieldValue::from("123")).is_ok());
//! assert_eq!(only_number(&FieldValue::from("12a")), Err(Reason::Number));
//!
//! let city = introduced_value_exists(["NY", "LN"], None);
//! assert_eq!(city(&FieldValue::from("Tokyo")), Err(Reason::ValueNoExist));
//! ```

mod reason;
mod rules;

pub use reason::{Reason, ReasonSet};
pub use rules::{
    email, evaluate, has_leading_white_space, has_trailing_white_space, has_white_space_line,
    introduced_value_exists, max_byte, max_length, min_length, only_number, pattern, required,
    rule, Rule, RuleError, RuleResult, SILENT_ERROR,
};
