//! Failure reasons and their display priority.

use std::collections::BTreeSet;
use std::fmt;

/// A named validation failure. The name doubles as the translation key.
///
/// Variants are declared in display priority order and the derived `Ord`
/// follows that order, so the first reason of a [`ReasonSet`] is always the
/// most actionable one. Custom reasons rank after the built-in ones (by name)
/// and the silent reason ranks last, so it only wins when nothing else failed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reason {
    Required,
    WhiteSpaceLine,
    Number,
    Email,
    Pattern,
    MinLength,
    MaxLength,
    ValueNoExist,
    Custom(String),
    /// Failure that must not show any message.
    WithoutMessage,
}

impl Reason {
    /// Build a reason from its name. Unknown names become [`Reason::Custom`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "required" => Self::Required,
            "whiteSpaceLine" => Self::WhiteSpaceLine,
            "number" => Self::Number,
            "email" => Self::Email,
            "pattern" => Self::Pattern,
            "minlength" => Self::MinLength,
            "maxlength" => Self::MaxLength,
            "valueNoExist" => Self::ValueNoExist,
            "withoutMessage" => Self::WithoutMessage,
            other => Self::Custom(other.to_string()),
        }
    }

    /// The reason name, which is also its translation key.
    pub fn name(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::WhiteSpaceLine => "whiteSpaceLine",
            Self::Number => "number",
            Self::Email => "email",
            Self::Pattern => "pattern",
            Self::MinLength => "minlength",
            Self::MaxLength => "maxlength",
            Self::ValueNoExist => "valueNoExist",
            Self::Custom(name) => name,
            Self::WithoutMessage => "withoutMessage",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Reason {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// The active failure reasons of one field. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasonSet {
    reasons: BTreeSet<Reason>,
}

impl ReasonSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reason: Reason) -> bool {
        self.reasons.insert(reason)
    }

    pub fn contains(&self, reason: &Reason) -> bool {
        self.reasons.contains(reason)
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    /// The highest priority reason.
    pub fn first(&self) -> Option<&Reason> {
        self.reasons.first()
    }

    /// Reasons in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Reason> {
        self.reasons.iter()
    }
}

impl FromIterator<Reason> for ReasonSet {
    fn from_iter<I: IntoIterator<Item = Reason>>(iter: I) -> Self {
        Self {
            reasons: iter.into_iter().collect(),
        }
    }
}

impl Extend<Reason> for ReasonSet {
    fn extend<I: IntoIterator<Item = Reason>>(&mut self, iter: I) {
        self.reasons.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_the_vocabulary() {
        for name in [
            "required",
            "whiteSpaceLine",
            "number",
            "email",
            "pattern",
            "minlength",
            "maxlength",
            "valueNoExist",
            "withoutMessage",
            "tooYoung",
        ] {
            assert_eq!(Reason::from_name(name).name(), name);
        }
    }

    #[test]
    fn priority_ignores_insertion_order() {
        let set: ReasonSet = [
            Reason::WithoutMessage,
            Reason::Custom("zeta".into()),
            Reason::ValueNoExist,
            Reason::Custom("alpha".into()),
        ]
        .into_iter()
        .collect();

        let order: Vec<&str> = set.iter().map(Reason::name).collect();
        assert_eq!(order, ["valueNoExist", "alpha", "zeta", "withoutMessage"]);
    }
}
