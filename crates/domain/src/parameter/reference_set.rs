//! Deduplicated set of parameter references

use std::collections::HashSet;
use std::collections::hash_set;

use super::reference::is_secure_reference;

/// The deduplicated references extracted from a document or supplied by a caller.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet {
    references: HashSet<String>,
}

impl ReferenceSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a reference. Returns false if it was already present.
    pub fn insert(&mut self, reference: impl Into<String>) -> bool {
        self.references.insert(reference.into())
    }

    /// Returns true if the reference is present.
    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.references.contains(reference)
    }

    /// Returns the number of distinct references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Iterates over the references in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(String::as_str)
    }

    /// Returns true if any reference carries the secure tag.
    #[must_use]
    pub fn has_secure_references(&self) -> bool {
        self.iter().any(is_secure_reference)
    }

    /// Returns the references sorted, for stable output.
    #[must_use]
    pub fn sorted(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_unstable();
        sorted
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            references: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ReferenceSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.references.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for ReferenceSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.references.into_iter()
    }
}
