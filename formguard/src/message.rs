//! Picks the single message shown for a field.

use crate::translate::Translations;
use crate::validation::{Reason, ReasonSet};

/// Key of the warning shown when a field reaches its max length.
pub const MAX_LENGTH_WARNING_KEY: &str = "maxLengthWarning";

const REQUIRED_KEY: &str = "required";
const WHITE_SPACE_LINE_KEY: &str = "whiteSpaceLine";

/// Resolve one display message for a set of failure reasons.
///
/// `required` wins over everything, then `whiteSpaceLine`; otherwise the
/// highest priority reason (see [`Reason`]) is looked up, falling back to the
/// table's generic invalid-value message. An empty set resolves to the
/// `required` message; a set holding only the silent reason resolves to the
/// empty string whatever the table says.
pub fn resolve_message<'t>(reasons: &ReasonSet, translations: &'t Translations) -> &'t str {
    if reasons.first() == Some(&Reason::WithoutMessage) {
        return "";
    }
    let key = if reasons.contains(&Reason::Required) {
        REQUIRED_KEY
    } else if reasons.contains(&Reason::WhiteSpaceLine) {
        WHITE_SPACE_LINE_KEY
    } else {
        reasons.first().map_or(REQUIRED_KEY, Reason::name)
    };
    translations.message(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::Language;

    #[test]
    fn empty_set_resolves_to_required() {
        let table = Translations::for_language(Language::EnUs);
        assert_eq!(resolve_message(&ReasonSet::new(), &table), "Required field");
    }
}
