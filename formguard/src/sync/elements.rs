use std::collections::HashMap;

/// Maps field names to the IDs of their visual elements.
///
/// Fields without an explicit binding use their own name as element ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementMap {
    bindings: HashMap<String, String>,
}

impl ElementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `field` to the element with ID `element_id`.
    pub fn bind(mut self, field: impl Into<String>, element_id: impl Into<String>) -> Self {
        self.bindings.insert(field.into(), element_id.into());
        self
    }

    pub fn element_id<'a>(&'a self, field: &'a str) -> &'a str {
        self.bindings.get(field).map_or(field, String::as_str)
    }
}
