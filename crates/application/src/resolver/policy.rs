//! Secure parameter policy filter
//!
//! Runs after lookup. A plain placeholder can still resolve to a parameter
//! stored as `SecureString`, so the stored type is checked as well as the name.

use paramsub_domain::{ResolutionMap, ResolveOptions};
use tracing::warn;

use crate::error::{ResolveError, ResolveResult};

/// Rejects the whole map if it holds secure parameters that `options` does not allow.
///
/// A reference counts as secure if it carries the `ssm-secure:` tag or its
/// stored type is `SecureString`. Either signal is enough.
///
/// # Errors
///
/// Returns `ResolveError::PolicyViolation` listing every secure reference when
/// secure resolution is disabled. No partial map is ever returned.
pub fn enforce_secure_policy(
    parameters: &ResolutionMap,
    options: &ResolveOptions,
) -> ResolveResult<()> {
    if options.resolve_secure_parameters {
        return Ok(());
    }

    let secure = parameters.secure_references();
    if secure.is_empty() {
        return Ok(());
    }

    warn!(count = secure.len(), references = ?secure, "secure parameters refused by policy");
    Err(ResolveError::policy_violation(secure))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use paramsub_domain::ParameterInfo;
    use pretty_assertions::assert_eq;

    fn mixed_map() -> ResolutionMap {
        [
            ("db/host", ParameterInfo::string("10.0.0.1")),
            ("ssm-secure:db/pass", ParameterInfo::secure("p@ss")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_plain_map_passes() {
        let map: ResolutionMap = [("db/host", ParameterInfo::string("10.0.0.1"))]
            .into_iter()
            .collect();
        assert!(enforce_secure_policy(&map, &ResolveOptions::new()).is_ok());
    }

    #[test]
    fn test_empty_map_passes() {
        assert!(enforce_secure_policy(&ResolutionMap::new(), &ResolveOptions::new()).is_ok());
    }

    #[test]
    fn test_secure_allowed() {
        assert!(enforce_secure_policy(&mixed_map(), &ResolveOptions::allow_secure()).is_ok());
    }

    #[test]
    fn test_secure_refused() {
        let error = enforce_secure_policy(&mixed_map(), &ResolveOptions::new()).unwrap_err();
        match error {
            ResolveError::PolicyViolation { references } => {
                assert_eq!(references, vec!["ssm-secure:db/pass".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_secure_type_behind_plain_reference_refused() {
        let map: ResolutionMap = [("db/pass", ParameterInfo::secure("p@ss"))]
            .into_iter()
            .collect();
        let error = enforce_secure_policy(&map, &ResolveOptions::new()).unwrap_err();
        assert!(error.is_policy_violation());
    }

    #[test]
    fn test_secure_tag_with_plain_type_refused() {
        let map: ResolutionMap = [("ssm-secure:db/pass", ParameterInfo::string("p@ss"))]
            .into_iter()
            .collect();
        assert!(enforce_secure_policy(&map, &ResolveOptions::new()).is_err());
    }
}
