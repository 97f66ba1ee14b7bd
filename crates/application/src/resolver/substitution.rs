//! Placeholder substitution
//!
//! Replaces `{{ reference }}` occurrences with resolved values. The requested
//! references are compiled into one alternation pattern, before any lookup, and
//! applied in a single left-to-right pass, so substituted values are never
//! rescanned and map iteration order cannot change the result.

use std::borrow::Cow;

use regex::{Captures, Regex};

use paramsub_domain::ResolutionMap;

/// Placeholder pattern built for a fixed set of references.
///
/// Compile once per operation and reuse it for every document resolved
/// against maps for the same references.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Option<Regex>,
}

impl Substitution {
    /// Builds the pattern matching a placeholder for any of `references`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the combined pattern exceeds the regex size limit.
    pub fn new<'r>(references: impl IntoIterator<Item = &'r str>) -> Result<Self, regex::Error> {
        let mut references: Vec<&str> = references.into_iter().collect();
        let pattern = if references.is_empty() {
            None
        } else {
            references.sort_unstable();
            references.dedup();
            Some(Regex::new(&placeholder_pattern(&references))?)
        };

        Ok(Self { pattern })
    }

    /// Replaces every matched placeholder whose reference has an entry in `parameters`.
    ///
    /// Placeholders for references absent from the map are left untouched.
    /// Values are inserted literally.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str, parameters: &ResolutionMap) -> Cow<'t, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };

        pattern.replace_all(text, |captures: &Captures<'_>| {
            parameters
                .value(&captures[1])
                .map_or_else(|| captures[0].to_string(), str::to_string)
        })
    }
}

/// Builds `\{\{\s*(ref1|ref2|...)\s*\}\}` with every reference escaped.
///
/// Callers pass the references sorted so the same set always yields the same pattern.
fn placeholder_pattern(references: &[&str]) -> String {
    let alternation = references
        .iter()
        .map(|reference| regex::escape(reference))
        .collect::<Vec<_>>()
        .join("|");

    format!(r"\{{\{{\s*({alternation})\s*\}}\}}")
}

/// Replaces every placeholder in `text` whose reference has an entry in `parameters`.
///
/// # Errors
///
/// Returns an error only if the combined pattern exceeds the regex size limit.
pub fn substitute(text: &str, parameters: &ResolutionMap) -> Result<String, regex::Error> {
    Ok(Substitution::new(parameters.references())?
        .apply(text, parameters)
        .into_owned())
}
