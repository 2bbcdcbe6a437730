//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Completion clients (OpenAI Responses API, offline mock)
//! - The HTTP / GraphQL API surface and CLI wiring

pub mod adapter;
pub mod api;

pub use adapter::*;
