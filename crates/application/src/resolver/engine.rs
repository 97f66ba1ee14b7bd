//! Parameter resolution engine
//!
//! Composes the parser, the parameter store, the policy filter and the
//! substitution pass into the top-level resolution operations.

use tracing::debug;

use paramsub_domain::{ReferenceSet, ResolutionMap, ResolveOptions, validate_reference};

use super::parser::parse_references;
use super::policy::enforce_secure_policy;
use super::substitution::Substitution;
use crate::error::ResolveResult;
use crate::ports::ParameterStore;

/// Resolves parameter placeholders against a parameter store.
///
/// Holds no state between calls; every operation is independent.
pub struct ParameterResolver<S> {
    store: S,
}

impl<S: ParameterStore> ParameterResolver<S> {
    /// Creates a resolver backed by the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Extracts every placeholder from `text` and resolves it.
    ///
    /// Returns an empty map, without touching the store, when the text has no
    /// placeholders.
    ///
    /// # Errors
    /// - `PolicyViolation` if the text has a secure placeholder and secure
    ///   resolution is off (the store is not called), or if a resolved
    ///   parameter is secure by name or type.
    /// - `Store` if the lookup fails.
    pub async fn extract_parameters_from_text(
        &self,
        text: &str,
        options: &ResolveOptions,
    ) -> ResolveResult<ResolutionMap> {
        let references = parse_references(text, options)?;
        debug!(count = references.len(), "extracted parameter references");

        self.fetch_filtered(&references, options).await
    }

    /// Resolves an explicit list of references.
    ///
    /// Duplicates are collapsed by exact string match before the lookup.
    ///
    /// # Errors
    /// - `Reference` if any entry is not a valid reference.
    /// - `Store` if the lookup fails.
    /// - `PolicyViolation` if a resolved parameter is secure and secure
    ///   resolution is off.
    pub async fn resolve_parameter_reference_list<I, R>(
        &self,
        references: I,
        options: &ResolveOptions,
    ) -> ResolveResult<ResolutionMap>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
    {
        let mut unique = ReferenceSet::new();
        for reference in references {
            let reference = reference.as_ref();
            validate_reference(reference)?;
            unique.insert(reference);
        }

        self.fetch_filtered(&unique, options).await
    }

    /// Resolves every placeholder in `text` and returns the rewritten text.
    ///
    /// Text without placeholders is returned unchanged. Placeholders whose
    /// reference is not in the resolved map are left as they are.
    ///
    /// # Errors
    /// Same as [`extract_parameters_from_text`](Self::extract_parameters_from_text),
    /// plus `Pattern` if the placeholder pattern cannot be compiled. The pattern
    /// is built before the lookup, so that failure never reaches the store.
    pub async fn resolve_parameters_in_text(
        &self,
        text: &str,
        options: &ResolveOptions,
    ) -> ResolveResult<ResolvedText> {
        let references = parse_references(text, options)?;
        debug!(count = references.len(), "extracted parameter references");

        let substitution = Substitution::new(references.iter())?;
        let parameters = self.fetch_filtered(&references, options).await?;

        Ok(ResolvedText {
            text: substitution.apply(text, &parameters).into_owned(),
            resolved_references: parameters.len(),
        })
    }

    /// Looks up the set and applies the secure policy.
    async fn fetch_filtered(
        &self,
        references: &ReferenceSet,
        options: &ResolveOptions,
    ) -> ResolveResult<ResolutionMap> {
        if references.is_empty() {
            return Ok(ResolutionMap::new());
        }

        debug!(count = references.len(), "fetching parameters");
        let parameters = self.store.fetch(references).await?;

        enforce_secure_policy(&parameters, options)?;
        Ok(parameters)
    }
}

/// A document with its placeholders substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedText {
    /// The rewritten text.
    pub text: String,

    /// How many distinct references were resolved.
    pub resolved_references: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use paramsub_domain::ParameterInfo;
    use pretty_assertions::assert_eq;

    use crate::error::ResolveError;
    use crate::ports::ParameterStoreError;

    struct MockStore {
        parameters: HashMap<String, ParameterInfo>,
        calls: Mutex<Vec<ReferenceSet>>,
    }

    impl MockStore {
        fn new(entries: &[(&str, ParameterInfo)]) -> Self {
            Self {
                parameters: entries
                    .iter()
                    .map(|(reference, info)| ((*reference).to_string(), info.clone()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<ReferenceSet> {
            self.calls.lock().expect("Lock poisoned").clone()
        }
    }

    #[async_trait]
    impl ParameterStore for MockStore {
        async fn fetch(
            &self,
            references: &ReferenceSet,
        ) -> Result<ResolutionMap, ParameterStoreError> {
            self.calls
                .lock()
                .expect("Lock poisoned")
                .push(references.clone());

            let missing: Vec<String> = references
                .iter()
                .filter(|reference| !self.parameters.contains_key(*reference))
                .map(String::from)
                .collect();
            if !missing.is_empty() {
                return Err(ParameterStoreError::NotFound(missing));
            }

            Ok(references
                .iter()
                .map(|reference| (reference, self.parameters[reference].clone()))
                .collect())
        }
    }

    fn db_store() -> MockStore {
        MockStore::new(&[
            ("db/host", ParameterInfo::string("10.0.0.1")),
            ("ssm-secure:db/pass", ParameterInfo::secure("p@ss")),
            ("db/legacy", ParameterInfo::secure("old")),
            ("a", ParameterInfo::string("A")),
        ])
    }

    const DOCUMENT: &str = "Host: {{ db/host }}, Secret: {{ ssm-secure:db/pass }}";

    #[tokio::test]
    async fn test_end_to_end_with_secure_allowed() {
        let resolver = ParameterResolver::new(db_store());

        let resolved = resolver
            .resolve_parameters_in_text(DOCUMENT, &ResolveOptions::allow_secure())
            .await
            .unwrap();

        assert_eq!(resolved.text, "Host: 10.0.0.1, Secret: p@ss");
        assert_eq!(resolved.resolved_references, 2);
    }

    #[tokio::test]
    async fn test_secure_placeholder_fails_before_lookup() {
        let resolver = ParameterResolver::new(db_store());

        let error = resolver
            .resolve_parameters_in_text(DOCUMENT, &ResolveOptions::new())
            .await
            .unwrap_err();

        assert!(error.is_policy_violation());
        assert!(resolver.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_secure_type_behind_plain_placeholder_fails() {
        let resolver = ParameterResolver::new(db_store());

        let error = resolver
            .extract_parameters_from_text("old={{ db/legacy }}", &ResolveOptions::new())
            .await
            .unwrap_err();

        assert!(error.is_policy_violation());
        assert_eq!(resolver.store().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_no_placeholders_skips_store() {
        let resolver = ParameterResolver::new(db_store());
        let text = "nothing to see {here}";

        let map = resolver
            .extract_parameters_from_text(text, &ResolveOptions::new())
            .await
            .unwrap();
        let resolved = resolver
            .resolve_parameters_in_text(text, &ResolveOptions::new())
            .await
            .unwrap();

        assert!(map.is_empty());
        assert_eq!(resolved.text, text);
        assert_eq!(resolved.resolved_references, 0);
        assert!(resolver.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_looked_up_once_and_all_replaced() {
        let resolver = ParameterResolver::new(db_store());

        let resolved = resolver
            .resolve_parameters_in_text("{{ a }} {{a}} {{  a  }}", &ResolveOptions::new())
            .await
            .unwrap();

        assert_eq!(resolved.text, "A A A");
        let calls = resolver.store().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 1);
        assert!(calls[0].contains("a"));
    }

    #[tokio::test]
    async fn test_store_error_propagates() {
        let resolver = ParameterResolver::new(db_store());

        let error = resolver
            .resolve_parameters_in_text("{{ a }} {{ missing }}", &ResolveOptions::new())
            .await
            .unwrap_err();

        match error {
            ResolveError::Store(ParameterStoreError::NotFound(missing)) => {
                assert_eq!(missing, vec!["missing".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_reference_list_dedup_and_filter() {
        let resolver = ParameterResolver::new(db_store());

        let map = resolver
            .resolve_parameter_reference_list(["a", "db/host", "a"], &ResolveOptions::new())
            .await
            .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.value("db/host"), Some("10.0.0.1"));
        assert_eq!(resolver.store().calls()[0].len(), 2);
    }

    #[tokio::test]
    async fn test_reference_list_secure_refused() {
        let resolver = ParameterResolver::new(db_store());

        let error = resolver
            .resolve_parameter_reference_list(
                vec!["db/host".to_string(), "ssm-secure:db/pass".to_string()],
                &ResolveOptions::new(),
            )
            .await
            .unwrap_err();

        match error {
            ResolveError::PolicyViolation { references } => {
                assert_eq!(references, vec!["ssm-secure:db/pass".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_reference_list_rejects_invalid_reference() {
        let resolver = ParameterResolver::new(db_store());

        let error = resolver
            .resolve_parameter_reference_list(["a", ""], &ResolveOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(error, ResolveError::Reference(_)));
        assert!(resolver.store().calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_reference_list() {
        let resolver = ParameterResolver::new(db_store());

        let map = resolver
            .resolve_parameter_reference_list(Vec::<String>::new(), &ResolveOptions::new())
            .await
            .unwrap();

        assert!(map.is_empty());
        assert!(resolver.store().calls().is_empty());
    }
}
