//! File-backed parameter store.
//!
//! Parameters live in a JSON or YAML document:
//! ```yaml
//! parameters:
//!   db/host:
//!     value: 10.0.0.1
//!     type: String
//!   ssm-secure:db/pass:
//!     value: p@ss
//!     type: SecureString
//! ```
//! `type` defaults to `String` when omitted. The document is read on every
//! fetch; nothing is cached between operations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use paramsub_application::ports::{ParameterStore, ParameterStoreError};
use paramsub_domain::{ParameterInfo, ParameterType, ReferenceSet, ResolutionMap};
use serde::Deserialize;
use tracing::debug;

use super::in_memory::select;
use crate::serialization::DocumentFormat;

/// On-disk parameter document.
#[derive(Debug, Deserialize)]
struct ParameterDocument {
    #[serde(default)]
    parameters: HashMap<String, StoredParameter>,
}

#[derive(Debug, Deserialize)]
struct StoredParameter {
    value: String,
    #[serde(rename = "type", default = "default_type")]
    param_type: ParameterType,
}

const fn default_type() -> ParameterType {
    ParameterType::String
}

/// Parameter store reading a JSON or YAML document from disk.
#[derive(Debug, Clone)]
pub struct FileParameterStore {
    path: PathBuf,
}

impl FileParameterStore {
    /// Creates a store backed by the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and parses the whole document.
    ///
    /// # Errors
    /// Returns `Unreachable` if the file cannot be read and `Malformed` if it
    /// cannot be parsed.
    pub async fn load(&self) -> Result<ResolutionMap, ParameterStoreError> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ParameterStoreError::Unreachable(format!("{}: {e}", self.path.display()))
        })?;

        let document: ParameterDocument = DocumentFormat::from_path(&self.path)
            .parse(&text)
            .map_err(|e| ParameterStoreError::Malformed(format!("{}: {e}", self.path.display())))?;

        Ok(document
            .parameters
            .into_iter()
            .map(|(reference, stored)| {
                (reference, ParameterInfo::new(stored.value, stored.param_type))
            })
            .collect())
    }
}

#[async_trait]
impl ParameterStore for FileParameterStore {
    async fn fetch(&self, references: &ReferenceSet) -> Result<ResolutionMap, ParameterStoreError> {
        let parameters = self.load().await?;
        debug!(
            path = %self.path.display(),
            stored = parameters.len(),
            requested = references.len(),
            "loaded parameter document"
        );

        select(&parameters, references)
    }
}
