pub mod container;
pub mod controller;
pub mod cors;
pub mod dispatcher;
pub mod graphql;
pub mod router;
pub mod server;

pub use container::{Container, ContainerConfig};
pub use cors::CorsPolicy;
pub use dispatcher::dispatch;
pub use graphql::{build_schema, AskSchema, QueryRoot};
pub use router::Router;
pub use server::{build_app, serve, GatewayState};
