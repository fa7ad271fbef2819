/// The tag of an element, used to tell leaf form controls apart from
/// structural containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    #[default]
    Div,
    Span,
    Label,
    Input,
    TextArea,
    Select,
    Table,
}

impl ElementKind {
    /// Lowercase tag name, as written in markup.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Label => "label",
            Self::Input => "input",
            Self::TextArea => "textarea",
            Self::Select => "select",
            Self::Table => "table",
        }
    }

    /// Composite kinds group other controls and never carry a value of their own.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Div | Self::Table)
    }

    /// Kinds that hold an editable value and may declare a max length.
    pub fn is_input_like(self) -> bool {
        matches!(self, Self::Input | Self::TextArea | Self::Select)
    }
}
