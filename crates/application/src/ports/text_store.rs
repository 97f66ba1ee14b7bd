//! Text storage port
//!
//! Defines how the core reads source documents and writes resolved output.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Errors that can occur while validating, reading or writing text.
#[derive(Debug, thiserror::Error)]
pub enum TextStoreError {
    /// A required path was empty.
    #[error("{0} file name is not provided")]
    MissingPath(&'static str),

    /// The path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a regular file.
    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The file exceeds the configured size bound.
    #[error("file {} is {size} bytes, exceeding the limit of {limit} bytes", .path.display())]
    TooLarge {
        /// The offending file.
        path: PathBuf,
        /// Actual size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// The file is not valid UTF-8 text.
    #[error("file is not valid UTF-8: {}", .0.display())]
    InvalidUtf8(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Text I/O used by file resolution.
#[async_trait]
pub trait TextStore: Send + Sync {
    /// Checks that the path exists, is a file, and is within the size bound.
    ///
    /// # Errors
    /// Returns an error describing the first failed check.
    async fn validate(&self, path: &Path) -> Result<(), TextStoreError>;

    /// Reads the whole file as UTF-8 text.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not UTF-8.
    async fn read(&self, path: &Path) -> Result<String, TextStoreError>;

    /// Writes text to the path.
    ///
    /// Implementations must not leave a partially written file visible at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    async fn write(&self, text: &str, path: &Path) -> Result<(), TextStoreError>;
}
