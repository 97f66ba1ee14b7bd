//! CLI error type.

use paramsub_application::ResolveError;
use paramsub_infrastructure::SerializationError;
use thiserror::Error;

use crate::exit_codes;

/// Errors surfaced by a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No parameter document was configured.
    #[error("no parameter document given; pass --parameters or set PARAMSUB_PARAMETERS")]
    MissingParameters,

    /// Resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Command output could not be produced.
    #[error("failed to write command output: {0}")]
    Serialization(#[from] SerializationError),

    /// Writing to stdout failed.
    #[error("failed to write to stdout: {0}")]
    Stdout(#[from] std::io::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingParameters => exit_codes::INPUT_ERROR,
            Self::Resolve(e) => exit_codes::for_kind(e.kind()),
            Self::Serialization(_) | Self::Stdout(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for commands.
pub type Result<T> = std::result::Result<T, CliError>;
