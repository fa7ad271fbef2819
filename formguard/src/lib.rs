//! Validation feedback for forms.
//!
//! Fields carry small, pure [validation rules](validation). Whenever a field is
//! reconciled, its failure reasons are turned into exactly one message (see
//! [`resolve_message`]) and its element in a [`formdom::Document`] gets the
//! matching class markers and, when the field is dirty, an error element
//! appended to its parent.
//!
//! [`FormValidator`] wires this to a whole [`Form`]: it schedules a deferred
//! pass per field and, in interactive mode, another one after every value
//! change.

pub mod config;
pub mod form;
pub mod message;
pub mod orchestrator;
pub mod sync;
pub mod translate;
pub mod validation;
pub mod value;

pub use config::{ConfigError, ValidationOptions};
pub use form::{Form, FormControl, FormModel};
pub use message::resolve_message;
pub use orchestrator::FormValidator;
pub use sync::{ElementMap, FieldState, FieldSynchronizer};
pub use translate::{Language, Translations};
pub use value::FieldValue;

pub mod prelude {
    pub use crate::config::ValidationOptions;
    pub use crate::form::{Form, FormControl, FormModel};
    pub use crate::orchestrator::FormValidator;
    pub use crate::sync::{ElementMap, FieldState, FieldSynchronizer};
    pub use crate::translate::{Language, Translations};
    pub use crate::validation::{
        email, has_leading_white_space, has_trailing_white_space, has_white_space_line,
        introduced_value_exists, max_byte, max_length, min_length, only_number, pattern,
        required, Reason, ReasonSet,
    };
    pub use crate::value::FieldValue;
}
