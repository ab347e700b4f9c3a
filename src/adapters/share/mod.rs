//! Share capability adapters.

pub mod console_share;

pub use console_share::ConsoleShare;
