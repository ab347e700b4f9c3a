//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. None of them are fatal to the process.

use crate::domain::EventId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// A required draft field is empty. No state was changed.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// Blob store get/set failed. In-memory state was not changed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// A stored blob exists but cannot be decoded.
    #[error("Corrupt data under key '{key}': {reason}")]
    Decode { key: String, reason: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Action requires a logged-in user")]
    Unauthenticated,

    #[error("Share failed: {0}")]
    Share(String),

    #[error("Terminal UI error: {0}")]
    Ui(String),

    #[error("Cannot {trigger} from the {from} screen")]
    InvalidTransition {
        from: &'static str,
        trigger: &'static str,
    },
}
