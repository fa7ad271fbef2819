/// Visual state of one field after its latest reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Never reconciled.
    #[default]
    Untouched,
    /// Invalid, but not dirty yet: markers cleared, no message.
    InvalidHidden,
    /// Invalid and dirty: error message and error markers shown.
    InvalidShown,
    /// No active failure.
    Valid,
}

impl FieldState {
    pub fn is_invalid(self) -> bool {
        matches!(self, Self::InvalidHidden | Self::InvalidShown)
    }
}
