//! Infrastructure adapters. Implement ports.
//!
//! Blob stores, share capability, terminal UI. Map errors to DomainError.

pub mod persistence;
pub mod share;
pub mod ui;
