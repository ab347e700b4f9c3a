//! Application use cases. Orchestrate domain logic via ports.

pub mod app;
pub mod auth_service;
pub mod event_repository;
pub mod persistent_store;
pub mod user_directory;

pub use app::{EventApp, View, share_message};
pub use auth_service::{AuthService, Session};
pub use event_repository::EventRepository;
pub use persistent_store::PersistentStore;
pub use user_directory::UserDirectory;
