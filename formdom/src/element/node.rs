use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{ClassList, ElementKind};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub kind: ElementKind,

    // Content
    pub content: Content,

    // Markers
    pub classes: ClassList,

    // Input state
    /// Current value of an input-like element. Empty for other kinds.
    pub value: String,
    /// Declared maximum length, if the element has one.
    pub max_length: Option<usize>,
}

impl Element {
    fn of_kind(kind: ElementKind) -> Self {
        Self {
            id: generate_id(kind.tag()),
            kind,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::of_kind(ElementKind::Div)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::of_kind(ElementKind::Span)
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::of_kind(ElementKind::Label)
        }
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::of_kind(ElementKind::Input)
        }
    }

    pub fn textarea(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::of_kind(ElementKind::TextArea)
        }
    }

    pub fn select(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::of_kind(ElementKind::Select)
        }
    }

    pub fn table() -> Self {
        Self::of_kind(ElementKind::Table)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markers
    pub fn class(mut self, class: &str) -> Self {
        self.classes.add(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    // Input state
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Length of the current value in characters.
    pub fn value_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    /// Append a child as the last one, replacing text content if present.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.kind.tag();
        write!(f, "<{tag} id=\"{}\"", self.id)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes)?;
        }
        if self.kind.is_input_like() {
            write!(f, " value=\"{}\"", self.value)?;
            if let Some(max) = self.max_length {
                write!(f, " maxlength=\"{max}\"")?;
            }
        }
        write!(f, ">")?;
        match &self.content {
            Content::None => {}
            Content::Text(text) => write!(f, "{text}")?,
            Content::Children(children) => {
                for child in children {
                    write!(f, "{child}")?;
                }
            }
        }
        write!(f, "</{tag}>")
    }
}
