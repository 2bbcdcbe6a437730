use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError, GatewayConfig, ReasoningEffort};

const RESPONSES_PATH: &str = "/v1/responses";

#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    reasoning: Reasoning,
    instructions: &'a str,
    input: &'a str,
}

#[derive(Serialize)]
struct Reasoning {
    effort: ReasoningEffort,
}

/// The parts of a Responses API payload that carry generated text.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ApiResponse {
    /// Top-level `output_text` when the server supplies it, otherwise every
    /// `output_text` part of every `message` item, concatenated in order.
    fn output_text(self) -> Option<String> {
        if let Some(text) = self.output_text {
            return Some(text);
        }

        let parts: Vec<String> = self
            .output
            .into_iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }
}

/// HTTP client for the OpenAI Responses API (and compatible servers).
///
/// One request per call, no retries. Any HTTP status outside 2xx is an
/// [`DomainError::Upstream`] error.
pub struct OpenAiResponsesClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + RESPONSES_PATH).
    url: String,
}

impl OpenAiResponsesClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), RESPONSES_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            url,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(&config.api_key, &config.base_url, config.request_timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionClient for OpenAiResponsesClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<Option<String>, DomainError> {
        let body = ApiRequest {
            model: request.model,
            reasoning: Reasoning {
                effort: request.reasoning_effort,
            },
            instructions: request.instructions,
            input: request.input,
        };

        debug!(url = %self.url, model = request.model, "sending completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("OpenAiResponsesClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiResponsesClient: API returned {status}: {body}");
            return Err(DomainError::upstream(format!(
                "OpenAiResponsesClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::invalid_response(format!("OpenAiResponsesClient: failed to parse response: {e}"))
        })?;

        Ok(api_response.output_text())
    }
}
