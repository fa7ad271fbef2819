use std::fmt;

/// An ordered, duplicate-free set of class markers.
///
/// Insertion order is preserved so rendered markup stays stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class. Returns `false` if it was already present.
    pub fn add(&mut self, class: &str) -> bool {
        if self.contains(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns `false` if it was not present.
    pub fn remove(&mut self, class: &str) -> bool {
        match self.classes.iter().position(|c| c == class) {
            Some(pos) => {
                self.classes.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn add_all(&mut self, classes: &[&str]) {
        for class in classes {
            self.add(class);
        }
    }

    pub fn remove_all(&mut self, classes: &[&str]) {
        for class in classes {
            self.remove(class);
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classes.join(" "))
    }
}
