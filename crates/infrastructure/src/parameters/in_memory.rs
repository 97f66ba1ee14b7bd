//! In-memory parameter store.

use async_trait::async_trait;
use paramsub_application::ports::{ParameterStore, ParameterStoreError};
use paramsub_domain::{ParameterInfo, ParameterType, ReferenceSet, ResolutionMap};

/// Parameter store holding its parameters in memory.
///
/// Every requested reference must exist; otherwise the whole fetch fails.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParameterStore {
    parameters: ResolutionMap,
}

impl InMemoryParameterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(
        mut self,
        reference: impl Into<String>,
        value: impl Into<String>,
        param_type: ParameterType,
    ) -> Self {
        self.insert(reference, ParameterInfo::new(value, param_type));
        self
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, reference: impl Into<String>, info: ParameterInfo) {
        self.parameters.insert(reference, info);
    }

    /// Returns the number of stored parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if the store holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

/// Picks the requested references out of `parameters`.
///
/// Fails with `NotFound` listing every missing reference, sorted.
pub(crate) fn select(
    parameters: &ResolutionMap,
    references: &ReferenceSet,
) -> Result<ResolutionMap, ParameterStoreError> {
    let mut missing: Vec<String> = references
        .iter()
        .filter(|reference| !parameters.contains(reference))
        .map(String::from)
        .collect();

    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(ParameterStoreError::NotFound(missing));
    }

    Ok(references
        .iter()
        .filter_map(|reference| {
            parameters
                .get(reference)
                .map(|info| (reference, info.clone()))
        })
        .collect())
}

#[async_trait]
impl ParameterStore for InMemoryParameterStore {
    async fn fetch(&self, references: &ReferenceSet) -> Result<ResolutionMap, ParameterStoreError> {
        select(&self.parameters, references)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> InMemoryParameterStore {
        InMemoryParameterStore::new()
            .with_parameter("db/host", "10.0.0.1", ParameterType::String)
            .with_parameter("db/hosts", "a,b", ParameterType::StringList)
            .with_parameter("ssm-secure:db/pass", "p@ss", ParameterType::SecureString)
    }

    #[tokio::test]
    async fn test_fetch_returns_only_requested() {
        let references: ReferenceSet = ["db/host", "db/hosts"].into_iter().collect();

        let map = store().fetch(&references).await.unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.value("db/host"), Some("10.0.0.1"));
        assert_eq!(
            map.get("db/hosts").map(|info| info.param_type),
            Some(ParameterType::StringList)
        );
        assert!(!map.contains("ssm-secure:db/pass"));
    }

    #[tokio::test]
    async fn test_fetch_reports_all_missing() {
        let references: ReferenceSet = ["db/host", "z", "a"].into_iter().collect();

        let error = store().fetch(&references).await.unwrap_err();

        match error {
            ParameterStoreError::NotFound(missing) => {
                assert_eq!(missing, vec!["a".to_string(), "z".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_len() {
        assert_eq!(store().len(), 3);
        assert!(InMemoryParameterStore::new().is_empty());
    }
}
