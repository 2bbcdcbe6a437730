use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// Sends a single prompt to a hosted completion service.
///
/// Implementors own transport, authentication and the vendor wire format.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the generated text, or `None` when the service answered without any.
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Option<String>, DomainError>;
}
