//! Placeholder parser for `{{ reference }}` syntax
//!
//! Two forms are recognized:
//! - `{{ db/host }}` - plain parameter
//! - `{{ ssm-secure:db/pass }}` - secure parameter, the captured reference keeps its tag
//!
//! The plain form does not accept `:`, so the two forms never match the same text.

use std::sync::LazyLock;

use regex::Regex;

use paramsub_domain::{ReferenceSet, ResolveOptions};

use crate::error::{ResolveError, ResolveResult};

/// Matches a plain placeholder, capturing the reference.
static PLAIN_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z0-9_\-./]+)\s*\}\}").expect("valid regex"));

/// Matches a secure placeholder, capturing the tagged reference.
static SECURE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*(ssm-secure:[A-Za-z0-9_\-./]+)\s*\}\}").expect("valid regex")
});

/// References found in a document, split by placeholder form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPlaceholders {
    /// References from plain placeholders.
    pub plain: ReferenceSet,

    /// References from secure placeholders, including the `ssm-secure:` tag.
    pub secure: ReferenceSet,
}

impl ParsedPlaceholders {
    /// Returns true if no placeholders were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.secure.is_empty()
    }

    /// Merges both forms into a single deduplicated set.
    #[must_use]
    pub fn into_reference_set(self) -> ReferenceSet {
        let mut references = self.plain;
        references.extend(self.secure);
        references
    }
}

/// Scans text for both placeholder forms without applying any policy.
#[must_use]
pub fn scan_placeholders(text: &str) -> ParsedPlaceholders {
    ParsedPlaceholders {
        plain: captured_references(&PLAIN_PLACEHOLDER, text),
        secure: captured_references(&SECURE_PLACEHOLDER, text),
    }
}

fn captured_references(pattern: &Regex, text: &str) -> ReferenceSet {
    pattern
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .map(|reference| reference.as_str())
        .collect()
}

/// Extracts the deduplicated references of every placeholder in the text.
///
/// Returns an empty set when the text has no placeholders.
///
/// # Errors
///
/// Returns `ResolveError::PolicyViolation` if the text contains a secure
/// placeholder and `options` does not allow secure parameters. This check runs
/// on syntax alone, before any lookup.
pub fn parse_references(text: &str, options: &ResolveOptions) -> ResolveResult<ReferenceSet> {
    let parsed = scan_placeholders(text);

    if !options.resolve_secure_parameters && parsed.secure.has_secure_references() {
        let secure: Vec<&str> = parsed.secure.iter().collect();
        return Err(ResolveError::policy_violation(secure));
    }

    Ok(parsed.into_reference_set())
}

/// Returns true if the text contains at least one placeholder of either form.
#[must_use]
pub fn has_placeholders(text: &str) -> bool {
    PLAIN_PLACEHOLDER.is_match(text) || SECURE_PLACEHOLDER.is_match(text)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn allow() -> ResolveOptions {
        ResolveOptions::allow_secure()
    }

    #[test]
    fn test_parse_simple_placeholder() {
        let refs = parse_references("{{db/host}}", &ResolveOptions::new()).unwrap();
        assert_eq!(refs.sorted(), vec!["db/host"]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let refs = parse_references("{{ name }} and {{   name   }}", &ResolveOptions::new()).unwrap();
        assert_eq!(refs.sorted(), vec!["name"]);
    }

    #[test]
    fn test_parse_whitespace_including_newlines() {
        let refs = parse_references("{{\n\tname\n}}", &ResolveOptions::new()).unwrap();
        assert_eq!(refs.sorted(), vec!["name"]);
    }

    #[test]
    fn test_no_placeholders() {
        let refs = parse_references("Hello, World! {not} {{}} {{ }}", &ResolveOptions::new()).unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let refs = parse_references("{{ a }} {{a}} {{  a  }}", &ResolveOptions::new()).unwrap();
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn test_secure_and_plain_merge() {
        let refs = parse_references(
            "Host: {{ db/host }}, Secret: {{ ssm-secure:db/pass }}",
            &allow(),
        )
        .unwrap();
        assert_eq!(refs.sorted(), vec!["db/host", "ssm-secure:db/pass"]);
    }

    #[test]
    fn test_secure_placeholder_rejected_without_permission() {
        let result = parse_references(
            "Host: {{ db/host }}, Secret: {{ ssm-secure:db/pass }}",
            &ResolveOptions::new(),
        );
        match result {
            Err(ResolveError::PolicyViolation { references }) => {
                assert_eq!(references, vec!["ssm-secure:db/pass".to_string()]);
            }
            other => panic!("expected policy violation, got {other:?}"),
        }
    }

    #[test]
    fn test_forms_are_disjoint() {
        let parsed = scan_placeholders("{{ ssm-secure:x }} {{ x }}");
        assert_eq!(parsed.secure.sorted(), vec!["ssm-secure:x"]);
        assert_eq!(parsed.plain.sorted(), vec!["x"]);
    }

    #[test]
    fn test_unsupported_interior_is_ignored() {
        let refs = parse_references("{{ a b }} {{ ssm:c }} {{ $uuid }}", &ResolveOptions::new()).unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_unclosed_placeholder() {
        let refs = parse_references("{{ name", &ResolveOptions::new()).unwrap();
        assert!(refs.is_empty());
    }

    #[test]
    fn test_placeholder_in_json() {
        let refs = parse_references(
            r#"{"host": "{{ db/host }}", "port": "{{db/port}}"}"#,
            &ResolveOptions::new(),
        )
        .unwrap();
        assert_eq!(refs.sorted(), vec!["db/host", "db/port"]);
    }

    #[test]
    fn test_has_placeholders() {
        assert!(has_placeholders("{{ a }}"));
        assert!(has_placeholders("x {{ssm-secure:a}} y"));
        assert!(!has_placeholders("{{ }}"));
        assert!(!has_placeholders("plain text"));
    }
}
