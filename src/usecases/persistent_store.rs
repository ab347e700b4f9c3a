//! Typed load/save over the opaque blob store.
//!
//! Values are encoded as JSON text. A blob that is present but cannot be
//! decoded is surfaced as `DomainError::Decode`, never replaced by a default.

use crate::domain::DomainError;
use crate::ports::BlobStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct PersistentStore {
    blob: Arc<dyn BlobStore>,
}

impl PersistentStore {
    pub fn new(blob: Arc<dyn BlobStore>) -> Self {
        Self { blob }
    }

    /// Decoded value under `key`, or `None` when the key is absent.
    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DomainError> {
        let Some(raw) = self.blob.get(key).await? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw).map_err(|e| DomainError::Decode {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        debug!(key, bytes = raw.len(), "loaded");
        Ok(Some(value))
    }

    /// Like `load`, with the type's empty default for a missing key.
    pub async fn load_or_default<T: DeserializeOwned + Default>(
        &self,
        key: &str,
    ) -> Result<T, DomainError> {
        Ok(self.load(key).await?.unwrap_or_default())
    }

    /// Encodes and writes `value`. Returns only after the blob store completes.
    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), DomainError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| DomainError::Persistence(format!("encode '{}': {}", key, e)))?;
        self.blob.set(key, &raw).await?;
        debug!(key, bytes = raw.len(), "saved");
        Ok(())
    }
}
