//! # Domain Layer
//!
//! Configuration, completion models and the error type.
//! This layer is independent of the HTTP server and the completion vendor.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
