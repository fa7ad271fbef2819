pub(super) const STRINGS: &[(&str, &str)] = &[
    ("requiredGraterThan0", "Must be greater than 0"),
    ("withoutMessage", ""),
    ("malformedField", "Invalid field"),
    ("required", "Required field"),
    ("email", "Invalid email"),
    ("pattern", "Invalid format"),
    ("whiteSpaceLine", "No leading spaces"),
    ("maxlength", "Too many characters"),
    ("minlength", "Too short"),
    ("invalid", "Invalid input"),
    ("maxLengthWarning", "Limit reached"),
    ("valueNoExist", "Value not in list"),
    ("introducedValueNoExist", "Item not found"),
    ("number", "Must be a number"),
];
