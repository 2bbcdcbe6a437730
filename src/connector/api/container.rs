use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{AskUseCase, CompletionClient};
use crate::domain::GatewayConfig;
use crate::{MockCompletion, OpenAiResponsesClient};

use super::cors::CorsPolicy;
use super::graphql::{build_schema, AskSchema};

pub struct ContainerConfig {
    pub gateway: GatewayConfig,
    /// Answer prompts locally instead of calling the completion service.
    pub mock_completions: bool,
}

pub struct Container {
    completion_client: Arc<dyn CompletionClient>,
    config: Arc<GatewayConfig>,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Self {
        let completion_client: Arc<dyn CompletionClient> = if config.mock_completions {
            debug!("Using mock completion client");
            Arc::new(MockCompletion::new())
        } else {
            let client = OpenAiResponsesClient::from_config(&config.gateway);
            debug!("Using OpenAI Responses client at {}", client.url());
            Arc::new(client)
        };

        Self::with_client(config.gateway, completion_client)
    }

    pub fn with_client(gateway: GatewayConfig, completion_client: Arc<dyn CompletionClient>) -> Self {
        Self {
            completion_client,
            config: Arc::new(gateway),
        }
    }

    pub fn ask_use_case(&self) -> AskUseCase {
        AskUseCase::new(self.completion_client.clone(), self.config.clone())
    }

    pub fn schema(&self) -> AskSchema {
        build_schema(self.ask_use_case())
    }

    pub fn cors_policy(&self) -> Result<CorsPolicy> {
        Ok(CorsPolicy::from_config(&self.config)?)
    }

    pub fn config(&self) -> &Arc<GatewayConfig> {
        &self.config
    }
}
