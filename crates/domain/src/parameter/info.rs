//! Resolved parameter metadata

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The stored type of a parameter, using the store's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    /// A plain string value.
    String,
    /// A comma separated list of strings, stored as one string.
    StringList,
    /// An encrypted value. Always treated as sensitive.
    SecureString,
}

impl ParameterType {
    /// Returns the wire name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::SecureString => "SecureString",
        }
    }

    /// Returns true if values of this type are sensitive.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::SecureString)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(Self::String),
            "StringList" => Ok(Self::StringList),
            "SecureString" => Ok(Self::SecureString),
            other => Err(DomainError::UnknownParameterType(other.to_string())),
        }
    }
}

/// The resolved state of a parameter reference, as returned by a parameter store.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// The stored value.
    pub value: String,

    /// The stored type.
    #[serde(rename = "type")]
    pub param_type: ParameterType,
}

impl ParameterInfo {
    /// Creates parameter info from a value and type.
    #[must_use]
    pub fn new(value: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            value: value.into(),
            param_type,
        }
    }

    /// Creates a plain `String` parameter.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::new(value, ParameterType::String)
    }

    /// Creates a `SecureString` parameter.
    #[must_use]
    pub fn secure(value: impl Into<String>) -> Self {
        Self::new(value, ParameterType::SecureString)
    }

    /// Returns true if the stored type is sensitive.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.param_type.is_secure()
    }
}

// Values may be secrets, keep them out of debug output.
impl fmt::Debug for ParameterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterInfo")
            .field("value", &"<redacted>")
            .field("param_type", &self.param_type)
            .finish()
    }
}
