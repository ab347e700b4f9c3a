//! Implements BlobStore using one JSON file per key.
//!
//! `<base_dir>/<key>.json`. Values are opaque text to this adapter.

use crate::domain::DomainError;
use crate::ports::BlobStore;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// File-backed blob store.
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, DomainError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(DomainError::Persistence(format!("invalid key '{}'", key)));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

#[async_trait::async_trait]
impl BlobStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::Persistence(format!(
                "read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Atomic save using write-replace: temp file, sync_all, rename over the target.
    /// A crash mid-write leaves the previous value intact.
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| DomainError::Persistence(format!("create data dir: {}", e)))?;

        let temp_path = path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Persistence(format!("create temp file: {}", e)))?;
        f.write_all(value.as_bytes())
            .await
            .map_err(|e| DomainError::Persistence(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Persistence(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &path)
            .await
            .map_err(|e| DomainError::Persistence(format!("atomic rename failed: {}", e)))?;

        debug!(key, path = %path.display(), bytes = value.len(), "blob written");
        Ok(())
    }
}
