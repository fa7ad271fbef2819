mod class_list;
mod enums;

pub use class_list::ClassList;
pub use enums::ElementKind;
