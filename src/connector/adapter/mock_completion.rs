use async_trait::async_trait;

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError};

/// Offline completion client: answers every prompt by echoing it back.
pub struct MockCompletion;

impl MockCompletion {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Option<String>, DomainError> {
        if request.input.is_empty() {
            return Ok(None);
        }
        Ok(Some(format!("[{}] {}", request.model, request.input)))
    }
}
