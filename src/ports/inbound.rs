//! Inbound port. UI (adapter) drives the application.

use crate::domain::DomainError;

/// Input port: a presentation layer runs the interactive session against `EventApp`.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run until the user quits. Recoverable errors are shown and the session continues.
    async fn run(&self) -> Result<(), DomainError>;
}
