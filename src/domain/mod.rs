//! Core domain layer. No external I/O dependencies.
//!
//! Entities, navigation states and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod navigation;
pub mod statistics;

pub use entities::{Comment, DraftField, Event, EventDraft, EventId, User};
pub use errors::DomainError;
pub use navigation::{Navigator, Screen, Trigger};
pub use statistics::Statistics;
