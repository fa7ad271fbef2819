//! A mutable element tree addressed by element ID.
//!
//! IDs are expected to be unique. [`Document::append_child`] refuses to insert
//! an element whose ID is already taken, so the tree can only lose that
//! property if callers mutate elements directly.

use log::trace;
use thiserror::Error;

use crate::element::{
    count_elements, find_element, find_element_mut, find_parent, remove_descendant, Element,
};

/// Errors returned by tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The requested parent does not exist in the tree.
    #[error("Parent element '{0}' not found")]
    ParentNotFound(String),

    /// Another element already uses this ID.
    #[error("Element ID '{0}' is already in use")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// ID of the element's direct parent. `None` for the root or unknown IDs.
    pub fn parent_id(&self, id: &str) -> Option<&str> {
        find_parent(&self.root, id).map(|p| p.id.as_str())
    }

    /// Append `child` as the last child of `parent_id`.
    pub fn append_child(&mut self, parent_id: &str, child: Element) -> Result<(), DomError> {
        if self.contains(&child.id) {
            return Err(DomError::DuplicateId(child.id));
        }
        let parent = find_element_mut(&mut self.root, parent_id)
            .ok_or_else(|| DomError::ParentNotFound(parent_id.to_string()))?;
        trace!("append #{} to #{}", child.id, parent_id);
        parent.push_child(child);
        Ok(())
    }

    /// Detach an element (and its subtree). Returns the removed element.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let removed = remove_descendant(&mut self.root, id);
        if removed.is_some() {
            trace!("removed #{id}");
        }
        removed
    }

    /// Number of elements carrying this ID.
    pub fn count(&self, id: &str) -> usize {
        count_elements(&self.root, id)
    }

    /// Set the value of an element. Returns `false` if it does not exist.
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Add class markers to an element. Returns `false` if it does not exist.
    pub fn add_classes(&mut self, id: &str, classes: &[&str]) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.classes.add_all(classes);
                true
            }
            None => false,
        }
    }

    /// Remove class markers from an element. Returns `false` if it does not exist.
    pub fn remove_classes(&mut self, id: &str, classes: &[&str]) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.classes.remove_all(classes);
                true
            }
            None => false,
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    /// Text of a text-bearing element.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Element::text_content)
    }
}
