//! Field values.

use std::fmt;

use serde::Deserialize;

/// The current value of a form field.
///
/// Untagged for serde so a JSON snapshot like `{"age": 12, "name": "Ann",
/// "city": null}` deserializes directly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Absent or the empty string. Zero is *not* empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Number(_) => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 0.0)
    }

    /// Borrow the text of a [`FieldValue::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Stringify the value. `Null` becomes the empty string and integral
    /// numbers drop their fractional part (`0.0` renders as `"0"`).
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_stringify_like_integers_when_integral() {
        assert_eq!(FieldValue::Number(0.0).to_text(), "0");
        assert_eq!(FieldValue::Number(-3.0).to_text(), "-3");
        assert_eq!(FieldValue::Number(12.5).to_text(), "12.5");
    }

    #[test]
    fn null_is_empty_but_zero_is_not() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
    }

    #[test]
    fn snapshot_deserializes_untagged() {
        let v: Vec<FieldValue> = serde_json::from_str(r#"[null, 12, "Ann"]"#).unwrap();
        assert_eq!(
            v,
            vec![
                FieldValue::Null,
                FieldValue::Number(12.0),
                FieldValue::Text("Ann".into())
            ]
        );
    }
}
