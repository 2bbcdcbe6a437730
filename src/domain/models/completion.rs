use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Field value returned when the service answered without any output text.
pub const NO_RESPONSE: &str = "no response";
/// Field value returned when the upstream call failed.
pub const REQUEST_FAILED: &str = "request failed";

/// How much reasoning the model should spend before answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Minimal,
    #[default]
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReasoningEffort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Self::Minimal),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(DomainError::config(format!(
                "unknown reasoning effort '{other}' (expected minimal, low, medium or high)"
            ))),
        }
    }
}

/// A single prompt to send to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub reasoning_effort: ReasoningEffort,
    pub instructions: &'a str,
    pub input: &'a str,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(
        model: &'a str,
        reasoning_effort: ReasoningEffort,
        instructions: &'a str,
        input: &'a str,
    ) -> Self {
        Self {
            model,
            reasoning_effort,
            instructions,
            input,
        }
    }
}

/// Outcome of one `ask` resolution.
///
/// Keeps the three cases apart internally; [`Completion::field_value`] collapses
/// them into the string the GraphQL field returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Text(String),
    Empty,
    Failed(String),
}

impl Completion {
    pub fn from_output(output: Option<String>) -> Self {
        match output {
            Some(text) if !text.is_empty() => Self::Text(text),
            _ => Self::Empty,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn field_value(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Empty => NO_RESPONSE,
            Self::Failed(_) => REQUEST_FAILED,
        }
    }

    pub fn into_field_value(self) -> String {
        match self {
            Self::Text(text) => text,
            other => other.field_value().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasoning_effort_parses_case_insensitively() {
        assert_eq!("LOW".parse::<ReasoningEffort>().unwrap(), ReasoningEffort::Low);
        assert_eq!(" high ".parse::<ReasoningEffort>().unwrap(), ReasoningEffort::High);
        assert!("extreme".parse::<ReasoningEffort>().unwrap_err().is_config());
    }

    #[test]
    fn reasoning_effort_serializes_lowercase() {
        let json = serde_json::to_string(&ReasoningEffort::Minimal).unwrap();
        assert_eq!(json, "\"minimal\"");
    }

    #[test]
    fn empty_output_renders_placeholder() {
        assert_eq!(Completion::from_output(None).field_value(), NO_RESPONSE);
        assert_eq!(Completion::from_output(Some(String::new())), Completion::Empty);
    }

    #[test]
    fn failure_renders_fallback_and_keeps_cause() {
        let completion = Completion::Failed("connection refused".into());
        assert!(completion.is_failed());
        assert_eq!(completion.into_field_value(), REQUEST_FAILED);
    }

    #[test]
    fn text_passes_through_verbatim() {
        let completion = Completion::from_output(Some(" 42 ".into()));
        assert!(completion.is_text());
        assert_eq!(completion.into_field_value(), " 42 ");
    }
}
