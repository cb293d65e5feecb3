//! The resolved tag value carried by every log record.

use std::fmt;
use std::sync::Arc;

/// A resolved `(category, name)` pair.
///
/// Equality and hashing are by value, so two tags built from equal strings
/// are interchangeable as cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    category: Arc<str>,
    name: Arc<str>,
}

impl Tag {
    /// Create a tag from a category and a name.
    pub fn new(category: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Tag used for lines that arrive without an explicit source.
    pub fn unsorted() -> Self {
        Self::new("Unsorted", "Default")
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category immediately followed by name, with no separator.
    ///
    /// This is the seed input for per-tag color derivation and must stay
    /// stable across releases.
    pub fn long_form(&self) -> String {
        let mut s = String::with_capacity(self.category.len() + self.name.len());
        s.push_str(&self.category);
        s.push_str(&self.name);
        s
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_long_form_concatenates_without_separator() {
        let tag = Tag::new("Net", "Client");
        assert_eq!(tag.long_form(), "NetClient");
        assert_eq!(tag.to_string(), "Net:Client");
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = Tag::new("Net", "Client");
        let b = Tag::new(String::from("Net"), String::from("Client"));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&Tag::new("Net", "Server")));
    }

    #[test]
    fn test_unsorted_tag() {
        let tag = Tag::unsorted();
        assert_eq!(tag.category(), "Unsorted");
        assert_eq!(tag.name(), "Default");
    }
}
