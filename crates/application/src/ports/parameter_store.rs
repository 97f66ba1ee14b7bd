//! Parameter store port
//!
//! Defines the lookup capability the core uses to fetch parameter values.

use async_trait::async_trait;

use paramsub_domain::{ReferenceSet, ResolutionMap};

/// Errors that can occur during a parameter lookup.
#[derive(Debug, thiserror::Error)]
pub enum ParameterStoreError {
    /// The store could not be reached.
    #[error("parameter store unreachable: {0}")]
    Unreachable(String),

    /// One or more references do not exist in the store.
    #[error("parameters not found: {}", .0.join(", "))]
    NotFound(Vec<String>),

    /// The caller is not allowed to read the parameters.
    #[error("access denied: {0}")]
    Access(String),

    /// The store returned data that could not be interpreted.
    #[error("malformed parameter data: {0}")]
    Malformed(String),
}

/// Lookup capability backed by a parameter store.
///
/// Batching, pagination, retries and timeouts are the implementation's concern.
/// The core calls [`fetch`](ParameterStore::fetch) at most once per operation,
/// always with a non-empty set, and treats any error as fatal.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches the stored info for every reference in the set.
    ///
    /// # Arguments
    /// * `references` - Deduplicated, non-empty set of references
    ///
    /// # Returns
    /// A map from each resolvable reference to its info.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable or a reference does not exist.
    async fn fetch(&self, references: &ReferenceSet) -> Result<ResolutionMap, ParameterStoreError>;
}

#[async_trait]
impl<T: ParameterStore + ?Sized> ParameterStore for &T {
    async fn fetch(&self, references: &ReferenceSet) -> Result<ResolutionMap, ParameterStoreError> {
        (**self).fetch(references).await
    }
}

#[async_trait]
impl<T: ParameterStore + ?Sized> ParameterStore for Box<T> {
    async fn fetch(&self, references: &ReferenceSet) -> Result<ResolutionMap, ParameterStoreError> {
        (**self).fetch(references).await
    }
}
