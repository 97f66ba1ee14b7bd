//! Serialization helpers for parameter documents and command output.
//!
//! - JSON output is deterministic: 2-space indentation, trailing newline,
//!   keys sorted when the source type is a `BTreeMap`
//! - Input documents are JSON or YAML, chosen by file extension

mod json;
mod yaml;

use std::path::Path;

use serde::de::DeserializeOwned;

pub use json::*;
pub use yaml::*;

/// Format of a structured document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from the file extension: `.json` is JSON, anything else YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Deserializes a document in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is invalid or doesn't match the expected type.
    pub fn parse<T: DeserializeOwned>(self, text: &str) -> Result<T, SerializationError> {
        match self {
            Self::Json => from_json(text),
            Self::Yaml => from_yaml(text),
        }
    }
}
