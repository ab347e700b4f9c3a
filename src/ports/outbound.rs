//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// Blob store key holding the encoded event list.
pub const EVENTS_KEY: &str = "events";
/// Blob store key holding the encoded user directory.
pub const USERS_KEY: &str = "users";

/// Opaque key -> text storage. The only persistence primitive available to the core.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replaces the value under `key`. Must not return before the write is durable.
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
}

/// Native share capability. Fire-and-forget: takes a text message, reports failure.
#[async_trait::async_trait]
pub trait SharePort: Send + Sync {
    async fn share(&self, message: &str) -> Result<(), DomainError>;
}
