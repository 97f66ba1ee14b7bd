//! Resolve file use case

use std::path::Path;

use tracing::info;

use paramsub_domain::ResolveOptions;

use crate::error::{ResolveError, ResolveResult};
use crate::ports::{ParameterStore, TextStore, TextStoreError};
use crate::resolver::ParameterResolver;

/// Output summarizing a file resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveFileOutput {
    /// How many distinct references were resolved.
    pub resolved_references: usize,
}

/// Reads a document, resolves its placeholders and writes the result.
pub struct ResolveFile<S, T> {
    resolver: ParameterResolver<S>,
    text_store: T,
}

impl<S: ParameterStore, T: TextStore> ResolveFile<S, T> {
    /// Creates a new `ResolveFile` use case.
    pub const fn new(parameter_store: S, text_store: T) -> Self {
        Self {
            resolver: ParameterResolver::new(parameter_store),
            text_store,
        }
    }

    /// Executes the use case.
    ///
    /// The output is written even when the input has no placeholders. Nothing
    /// is written if any stage fails.
    ///
    /// # Arguments
    /// * `input` - Path of the document to resolve
    /// * `output` - Path the resolved document is written to
    /// * `options` - Secure parameter policy
    ///
    /// # Errors
    /// - `Input` if a path is empty or the input fails validation or reading.
    /// - `PolicyViolation` or `Store` from resolution.
    /// - `Output` if the resolved document cannot be written.
    pub async fn execute(
        &self,
        input: &Path,
        output: &Path,
        options: &ResolveOptions,
    ) -> ResolveResult<ResolveFileOutput> {
        if input.as_os_str().is_empty() {
            return Err(ResolveError::Input(TextStoreError::MissingPath("input")));
        }
        if output.as_os_str().is_empty() {
            return Err(ResolveError::Input(TextStoreError::MissingPath("output")));
        }

        self.text_store
            .validate(input)
            .await
            .map_err(ResolveError::Input)?;

        let unresolved = self
            .text_store
            .read(input)
            .await
            .map_err(ResolveError::Input)?;

        let resolved = self
            .resolver
            .resolve_parameters_in_text(&unresolved, options)
            .await?;

        self.text_store
            .write(&resolved.text, output)
            .await
            .map_err(ResolveError::Output)?;

        info!(
            input = %input.display(),
            output = %output.display(),
            resolved = resolved.resolved_references,
            "resolved parameters in file"
        );

        Ok(ResolveFileOutput {
            resolved_references: resolved.resolved_references,
        })
    }
}
