use std::sync::Arc;

use tracing::{debug, error};

use crate::application::CompletionClient;
use crate::domain::{Completion, CompletionRequest, GatewayConfig};

/// Answers one prompt through the configured completion service.
///
/// Never fails: transport and service errors are logged and come back as
/// [`Completion::Failed`].
#[derive(Clone)]
pub struct AskUseCase {
    client: Arc<dyn CompletionClient>,
    config: Arc<GatewayConfig>,
}

impl AskUseCase {
    pub fn new(client: Arc<dyn CompletionClient>, config: Arc<GatewayConfig>) -> Self {
        Self { client, config }
    }

    pub async fn execute(&self, prompt: &str) -> Completion {
        let request = CompletionRequest::new(
            &self.config.model,
            self.config.reasoning_effort,
            &self.config.instructions,
            prompt,
        );

        match self.client.complete(&request).await {
            Ok(output) => {
                let completion = Completion::from_output(output);
                if !completion.is_text() {
                    debug!(model = %self.config.model, "completion service returned no output text");
                }
                completion
            }
            Err(e) => {
                error!(model = %self.config.model, error = %e, "completion request failed");
                Completion::Failed(e.to_string())
            }
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
