//! Field-level validation rules.
//!
//! Every rule is a pure, total function of the field's current value: it
//! never panics, never mutates anything and never touches the visual tree.
//! Absent and empty values are valid for every rule except
//! [`required`]; combine with it when a value is mandatory.

use regex::Regex;
use thiserror::Error;

use super::reason::{Reason, ReasonSet};
use crate::value::FieldValue;

/// Outcome of one rule: `Ok(())` when valid, otherwise the failure reason.
pub type RuleResult = Result<(), Reason>;

/// A boxed rule, as stored on a form control.
pub type Rule = Box<dyn Fn(&FieldValue) -> RuleResult + Send + Sync>;

/// Reason name that turns a list-membership failure into a silent one.
pub const SILENT_ERROR: &str = "none";

/// Errors raised while building a rule.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Box a closure as a [`Rule`].
pub fn rule<F>(f: F) -> Rule
where
    F: Fn(&FieldValue) -> RuleResult + Send + Sync + 'static,
{
    Box::new(f)
}

/// Run every rule and collect the reasons of those that failed.
pub fn evaluate(rules: &[Rule], value: &FieldValue) -> ReasonSet {
    rules.iter().filter_map(|r| r(value).err()).collect()
}

// ============================================================================
// Library rules
// ============================================================================

/// Only ASCII digits. Absent values and zero are valid.
pub fn only_number(value: &FieldValue) -> RuleResult {
    if value.to_text().chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Reason::Number)
    }
}

/// Fails when a non-empty value is made of whitespace only.
pub fn has_white_space_line(value: &FieldValue) -> RuleResult {
    let text = value.to_text();
    if !text.is_empty() && text.chars().all(char::is_whitespace) {
        Err(Reason::WhiteSpaceLine)
    } else {
        Ok(())
    }
}

/// Fails when the value starts with a space.
pub fn has_leading_white_space(value: &FieldValue) -> RuleResult {
    if value.to_text().starts_with(' ') {
        Err(Reason::WhiteSpaceLine)
    } else {
        Ok(())
    }
}

/// Fails when the value ends with a space.
pub fn has_trailing_white_space(value: &FieldValue) -> RuleResult {
    if value.to_text().ends_with(' ') {
        Err(Reason::WhiteSpaceLine)
    } else {
        Ok(())
    }
}

/// The value must be one of `candidates` (exact match, no normalization).
/// Empty values and zero are always accepted.
///
/// The failure reason depends on `custom_error`:
/// - `None`: [`Reason::ValueNoExist`]
/// - `Some("none")`: [`Reason::WithoutMessage`], which shows nothing
/// - `Some(name)`: a custom reason called `name`
pub fn introduced_value_exists<I, V>(
    candidates: I,
    custom_error: Option<&str>,
) -> impl Fn(&FieldValue) -> RuleResult + Send + Sync + 'static
where
    I: IntoIterator<Item = V>,
    V: Into<FieldValue>,
{
    let candidates: Vec<FieldValue> = candidates.into_iter().map(Into::into).collect();
    let failure = match custom_error {
        Some(SILENT_ERROR) => Reason::WithoutMessage,
        Some(name) => Reason::from_name(name),
        None => Reason::ValueNoExist,
    };

    move |value: &FieldValue| {
        if value.is_empty() || value.is_zero() || candidates.contains(value) {
            Ok(())
        } else {
            Err(failure.clone())
        }
    }
}

/// The UTF-8 encoding of the value may take at most `limit` bytes.
pub fn max_byte(limit: usize) -> impl Fn(&FieldValue) -> RuleResult + Send + Sync + 'static {
    move |value: &FieldValue| {
        if value.to_text().len() > limit {
            Err(Reason::MaxLength)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Stock rules
// ============================================================================

/// The value must be present and not the empty string.
pub fn required(value: &FieldValue) -> RuleResult {
    if value.is_empty() {
        Err(Reason::Required)
    } else {
        Ok(())
    }
}

/// Text of at least `min` characters.
pub fn min_length(min: usize) -> impl Fn(&FieldValue) -> RuleResult + Send + Sync + 'static {
    move |value: &FieldValue| match value {
        FieldValue::Text(s) if !s.is_empty() && s.chars().count() < min => {
            Err(Reason::MinLength)
        }
        _ => Ok(()),
    }
}

/// Text of at most `max` characters.
pub fn max_length(max: usize) -> impl Fn(&FieldValue) -> RuleResult + Send + Sync + 'static {
    move |value: &FieldValue| match value {
        FieldValue::Text(s) if s.chars().count() > max => Err(Reason::MaxLength),
        _ => Ok(()),
    }
}

/// The whole value must match `pattern`.
pub fn pattern(
    pattern: &str,
) -> Result<impl Fn(&FieldValue) -> RuleResult + Send + Sync + 'static, RuleError> {
    let re = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
        RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    Ok(move |value: &FieldValue| {
        if value.is_empty() || re.is_match(&value.to_text()) {
            Ok(())
        } else {
            Err(Reason::Pattern)
        }
    })
}

/// A syntactically valid email address.
pub fn email(value: &FieldValue) -> RuleResult {
    if value.is_empty() || email_address::EmailAddress::is_valid(&value.to_text()) {
        Ok(())
    } else {
        Err(Reason::Email)
    }
}
