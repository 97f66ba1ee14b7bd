//! Application error types

use paramsub_domain::DomainError;
use thiserror::Error;

use crate::ports::{ParameterStoreError, TextStoreError};

/// The broad class of a resolution failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A secure parameter was encountered without permission.
    PolicyViolation,
    /// The parameter store failed.
    Store,
    /// The input was missing, invalid or too large. Detected before any lookup.
    Input,
    /// The resolved output could not be written.
    Output,
}

/// Errors returned by every resolution operation.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Secure parameters were found while `ResolveSecureParameters` is off.
    #[error("resolving secure parameters is not allowed")]
    PolicyViolation {
        /// The offending references, sorted.
        references: Vec<String>,
    },

    /// The parameter store lookup failed.
    #[error("parameter store error: {0}")]
    Store(#[from] ParameterStoreError),

    /// A caller-supplied reference is invalid.
    #[error(transparent)]
    Reference(#[from] DomainError),

    /// The placeholder pattern for the requested references could not be built.
    ///
    /// Raised before the lookup, like every other input error.
    #[error("placeholder pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The input document could not be validated or read.
    #[error("input error: {0}")]
    Input(#[source] TextStoreError),

    /// The resolved document could not be written.
    #[error("output error: {0}")]
    Output(#[source] TextStoreError),
}

impl ResolveError {
    /// Creates a policy violation for the given references.
    pub fn policy_violation<I, S>(references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut references: Vec<String> = references.into_iter().map(Into::into).collect();
        references.sort_unstable();
        Self::PolicyViolation { references }
    }

    /// Returns the class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::PolicyViolation { .. } => ErrorKind::PolicyViolation,
            Self::Store(_) => ErrorKind::Store,
            Self::Reference(_) | Self::Pattern(_) | Self::Input(_) => ErrorKind::Input,
            Self::Output(_) => ErrorKind::Output,
        }
    }

    /// Returns true if this is a policy violation.
    #[must_use]
    pub const fn is_policy_violation(&self) -> bool {
        matches!(self, Self::PolicyViolation { .. })
    }
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
