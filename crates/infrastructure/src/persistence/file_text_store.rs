//! File-based text store.
//!
//! Writes go to a temporary file next to the target, are synced to disk, and
//! then renamed over the target, so readers never see a partially written file.
//! A crash mid-write can leave a `.{filename}.{uuid}.tmp` file behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use paramsub_application::ports::{TextStore, TextStoreError};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;

/// Default upper bound on input documents (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 1024 * 1024;

/// Text store backed by the local file system using `tokio::fs`.
#[derive(Debug, Clone)]
pub struct FileTextStore {
    max_input_bytes: u64,
}

impl FileTextStore {
    /// Creates a store that rejects inputs larger than `max_input_bytes`.
    #[must_use]
    pub const fn new(max_input_bytes: u64) -> Self {
        Self { max_input_bytes }
    }
}

impl Default for FileTextStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_BYTES)
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> TextStoreError {
    if e.kind() == ErrorKind::NotFound {
        TextStoreError::NotFound(path.to_path_buf())
    } else {
        TextStoreError::Io(e)
    }
}

/// Temporary path in the same directory as the target, so the rename stays on one filesystem.
fn temp_path_for(target: &Path) -> Result<PathBuf, TextStoreError> {
    let file_name = target
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| TextStoreError::NotAFile(target.to_path_buf()))?;

    let temp_name = format!(".{file_name}.{}.tmp", uuid::Uuid::now_v7().simple());
    Ok(target.with_file_name(temp_name))
}

async fn write_and_sync(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(contents).await?;
    file.sync_all().await
}

#[async_trait]
impl TextStore for FileTextStore {
    async fn validate(&self, path: &Path) -> Result<(), TextStoreError> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| map_io_error(path, e))?;

        if !metadata.is_file() {
            return Err(TextStoreError::NotAFile(path.to_path_buf()));
        }

        if metadata.len() > self.max_input_bytes {
            return Err(TextStoreError::TooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit: self.max_input_bytes,
            });
        }

        Ok(())
    }

    async fn read(&self, path: &Path) -> Result<String, TextStoreError> {
        let file = File::open(path).await.map_err(|e| map_io_error(path, e))?;

        // The file may have grown since `validate`; never read past the bound.
        let mut bytes = Vec::new();
        file.take(self.max_input_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .await?;

        let size = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        if size > self.max_input_bytes {
            return Err(TextStoreError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_input_bytes,
            });
        }

        String::from_utf8(bytes).map_err(|_| TextStoreError::InvalidUtf8(path.to_path_buf()))
    }

    async fn write(&self, text: &str, path: &Path) -> Result<(), TextStoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let temp_path = temp_path_for(path)?;

        if let Err(e) = write_and_sync(&temp_path, text.as_bytes()).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(TextStoreError::Io(e));
        }

        if let Err(e) = fs::rename(&temp_path, path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(TextStoreError::Io(e));
        }

        debug!(path = %path.display(), bytes = text.len(), "wrote resolved document");
        Ok(())
    }
}
