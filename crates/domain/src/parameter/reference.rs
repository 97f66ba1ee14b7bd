//! Parameter references as written inside placeholders.
//!
//! A reference is an opaque string. Two references are the same only if the
//! strings are byte-identical; no case or whitespace normalization happens here.

use crate::error::{DomainError, DomainResult};

/// Tag carried by references that name a secure parameter, e.g. `ssm-secure:db/pass`.
pub const SECURE_PREFIX: &str = "ssm-secure:";

/// Returns true if the reference carries the secure tag.
#[must_use]
pub fn is_secure_reference(reference: &str) -> bool {
    reference.starts_with(SECURE_PREFIX)
}

/// Returns true for characters allowed in a parameter name.
#[must_use]
pub(crate) const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/')
}

/// Validates a reference supplied directly by a caller.
///
/// Accepts a non-empty name made of ASCII letters, digits, `_`, `-`, `.` and `/`,
/// optionally preceded by [`SECURE_PREFIX`]. These are exactly the references the
/// placeholder grammar can produce, so a valid reference always round-trips
/// through a `{{ ... }}` placeholder.
///
/// # Errors
///
/// Returns `DomainError::InvalidReference` if the reference is empty or contains
/// other characters.
pub fn validate_reference(reference: &str) -> DomainResult<()> {
    let name = reference.strip_prefix(SECURE_PREFIX).unwrap_or(reference);

    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(DomainError::InvalidReference(reference.to_string()));
    }

    Ok(())
}
