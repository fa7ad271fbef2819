pub mod document;
pub mod element;
pub mod types;

pub use document::{DomError, Document};
pub use element::Element;
pub use types::*;
