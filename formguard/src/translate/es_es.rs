pub(super) const STRINGS: &[(&str, &str)] = &[
    ("requiredGraterThan0", "Debe ser mayor que 0"),
    ("withoutMessage", ""),
    ("malformedField", "Campo no válido"),
    ("required", "Campo obligatorio"),
    ("email", "Correo no válido"),
    ("pattern", "Formato no válido"),
    ("whiteSpaceLine", "No se permiten espacios en blanco"),
    ("leadingWhiteSpaceLine", "No se permiten espacios al inicio"),
    ("trailingWhiteSpaceLine", "No se permiten espacios al final"),
    ("maxlength", "Demasiados caracteres"),
    ("minlength", "Demasiado corto"),
    ("invalid", "Entrada no válida"),
    ("maxLengthWarning", "Límite alcanzado"),
    ("valueNoExist", "Valor no está en la lista"),
    ("introducedValueNoExist", "Elemento no encontrado"),
    ("number", "Debe ser un número"),
];
