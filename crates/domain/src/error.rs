//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A parameter reference is empty or contains unsupported characters.
    #[error("invalid parameter reference: {0:?}")]
    InvalidReference(String),

    /// The parameter type name is not one the store reports.
    #[error("unknown parameter type: {0}")]
    UnknownParameterType(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
