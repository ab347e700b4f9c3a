//! community-events: event lifecycle, local persistence and navigation core
//! for a community events client, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
