use std::time::Duration;

use tracing::warn;

use crate::domain::{DomainError, ReasoningEffort};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-5";
pub const DEFAULT_INSTRUCTIONS: &str = "Answer concisely.";
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/graphql";
pub const DEFAULT_ALLOW_ORIGIN: &str = "*";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment tag under which the GraphiQL page is switched off.
const PRODUCTION: &str = "production";

/// Process-wide settings, read once at startup and shared read-only by every request.
///
/// | Variable                  | Default                  |
/// |---------------------------|--------------------------|
/// | `OPENAI_API_KEY`          | `""` (calls will fail)   |
/// | `ENVIRONMENT`             | unset                    |
/// | `DOMAIN`                  | unset (reserved)         |
/// | `OPENAI_BASE_URL`         | `https://api.openai.com` |
/// | `OPENAI_MODEL`            | `gpt-5`                  |
/// | `OPENAI_REASONING_EFFORT` | `low`                    |
/// | `OPENAI_INSTRUCTIONS`     | `Answer concisely.`      |
/// | `OPENAI_TIMEOUT_SECS`     | `60`                     |
/// | `GRAPHQL_ENDPOINT`        | `/graphql`               |
/// | `CORS_ALLOW_ORIGIN`       | `*`                      |
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub environment: Option<String>,
    /// Not consulted by any request path yet.
    pub domain: Option<String>,
    pub base_url: String,
    pub model: String,
    pub reasoning_effort: ReasoningEffort,
    pub instructions: String,
    pub request_timeout: Duration,
    pub graphql_endpoint: String,
    pub cors_allow_origin: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            environment: None,
            domain: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            reasoning_effort: ReasoningEffort::default(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_string(),
            cors_allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let api_key = get("OPENAI_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            warn!("OPENAI_API_KEY is not set; completion requests will fail");
        }

        let reasoning_effort = match get("OPENAI_REASONING_EFFORT") {
            Some(raw) => raw.parse()?,
            None => defaults.reasoning_effort,
        };

        let request_timeout = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    DomainError::config(format!("OPENAI_TIMEOUT_SECS must be an integer, got '{raw}'"))
                })?;
                if secs == 0 {
                    return Err(DomainError::config("OPENAI_TIMEOUT_SECS must be positive"));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let graphql_endpoint = get("GRAPHQL_ENDPOINT").unwrap_or(defaults.graphql_endpoint);
        validate_graphql_endpoint(&graphql_endpoint)?;

        Ok(Self {
            api_key,
            environment: get("ENVIRONMENT"),
            domain: get("DOMAIN"),
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: get("OPENAI_MODEL").unwrap_or(defaults.model),
            reasoning_effort,
            instructions: get("OPENAI_INSTRUCTIONS").unwrap_or(defaults.instructions),
            request_timeout,
            graphql_endpoint,
            cors_allow_origin: get("CORS_ALLOW_ORIGIN").unwrap_or(defaults.cors_allow_origin),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.as_deref() == Some(PRODUCTION)
    }

    pub fn graphiql_enabled(&self) -> bool {
        !self.is_production()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }
}

/// The endpoint must be a literal route: leading `/`, no `:name` / `*name`
/// segments and no `{capture}` braces.
pub fn validate_graphql_endpoint(endpoint: &str) -> Result<(), DomainError> {
    if !endpoint.starts_with('/') {
        return Err(DomainError::config(format!(
            "GRAPHQL_ENDPOINT must start with '/', got '{endpoint}'"
        )));
    }

    let dynamic = endpoint.split('/').any(|segment| {
        segment.starts_with(':') || segment.starts_with('*') || segment.contains(['{', '}'])
    });
    if dynamic {
        return Err(DomainError::config(format!(
            "GRAPHQL_ENDPOINT must be a literal path without ':', '*', '{{' or '}}' segments, got '{endpoint}'"
        )));
    }

    Ok(())
}
