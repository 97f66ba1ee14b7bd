//! Mapping from parameter reference to resolved parameter info

use std::collections::HashMap;
use std::collections::hash_map;

use serde::{Deserialize, Serialize};

use super::info::ParameterInfo;
use super::reference::is_secure_reference;

/// Reference to resolved info mapping produced by a parameter store.
///
/// Keys are unique; iteration order is unspecified. Serializes as a plain
/// JSON/YAML object keyed by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionMap {
    parameters: HashMap<String, ParameterInfo>,
}

impl ResolutionMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a resolved parameter, returning the previous info if any.
    pub fn insert(
        &mut self,
        reference: impl Into<String>,
        info: ParameterInfo,
    ) -> Option<ParameterInfo> {
        self.parameters.insert(reference.into(), info)
    }

    /// Gets the info for a reference.
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&ParameterInfo> {
        self.parameters.get(reference)
    }

    /// Gets the value for a reference.
    #[must_use]
    pub fn value(&self, reference: &str) -> Option<&str> {
        self.get(reference).map(|info| info.value.as_str())
    }

    /// Returns true if the reference is present.
    #[must_use]
    pub fn contains(&self, reference: &str) -> bool {
        self.parameters.contains_key(reference)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterInfo)> {
        self.parameters
            .iter()
            .map(|(reference, info)| (reference.as_str(), info))
    }

    /// Iterates over references in unspecified order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Returns every reference that is sensitive by name or by stored type, sorted.
    #[must_use]
    pub fn secure_references(&self) -> Vec<&str> {
        let mut secure: Vec<&str> = self
            .iter()
            .filter(|(reference, info)| is_secure_reference(reference) || info.is_secure())
            .map(|(reference, _)| reference)
            .collect();
        secure.sort_unstable();
        secure
    }

    /// Returns entries sorted by reference, for stable output.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &ParameterInfo)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_unstable_by_key(|(reference, _)| *reference);
        sorted
    }
}

impl<S: Into<String>> FromIterator<(S, ParameterInfo)> for ResolutionMap {
    fn from_iter<I: IntoIterator<Item = (S, ParameterInfo)>>(iter: I) -> Self {
        Self {
            parameters: iter
                .into_iter()
                .map(|(reference, info)| (reference.into(), info))
                .collect(),
        }
    }
}

impl IntoIterator for ResolutionMap {
    type Item = (String, ParameterInfo);
    type IntoIter = hash_map::IntoIter<String, ParameterInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::parameter::ParameterType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_secure_by_prefix_or_type() {
        let map: ResolutionMap = [
            ("db/host", ParameterInfo::string("10.0.0.1")),
            ("db/pass", ParameterInfo::secure("p@ss")),
            ("ssm-secure:db/token", ParameterInfo::string("tok")),
            ("db/hosts", ParameterInfo::new("a,b", ParameterType::StringList)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            map.secure_references(),
            vec!["db/pass", "ssm-secure:db/token"]
        );
    }

    #[test]
    fn test_no_secure_references() {
        let map: ResolutionMap = [("a", ParameterInfo::string("1"))].into_iter().collect();
        assert!(map.secure_references().is_empty());
    }

    #[test]
    fn test_value_lookup() {
        let mut map = ResolutionMap::new();
        map.insert("a", ParameterInfo::string("1"));
        assert_eq!(map.value("a"), Some("1"));
        assert_eq!(map.value("b"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_serializes_as_object() {
        let map: ResolutionMap = [("db/host", ParameterInfo::string("10.0.0.1"))]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"db/host":{"value":"10.0.0.1","type":"String"}}"#);

        let parsed: ResolutionMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }

    #[test]
    fn test_sorted_entries() {
        let map: ResolutionMap = [
            ("b", ParameterInfo::string("2")),
            ("a", ParameterInfo::string("1")),
        ]
        .into_iter()
        .collect();
        let keys: Vec<&str> = map.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
