pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AskUseCase, CompletionClient};

pub use cli::Commands;

pub use connector::api::{build_app, Container, ContainerConfig, CorsPolicy};
pub use connector::{MockCompletion, OpenAiResponsesClient};

pub use domain::{
    Completion, CompletionRequest, DomainError, GatewayConfig, ReasoningEffort, NO_RESPONSE,
    REQUEST_FAILED,
};
