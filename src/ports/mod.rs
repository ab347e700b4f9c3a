//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the presentation adapter into the application
//! - Outbound: Called by the application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::InputPort;
pub use outbound::{BlobStore, EVENTS_KEY, SharePort, USERS_KEY};
