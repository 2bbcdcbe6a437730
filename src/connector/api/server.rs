use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use tracing::info;

use crate::domain::{validate_graphql_endpoint, GatewayConfig};

use super::container::Container;
use super::dispatcher::dispatch;
use super::graphql::{graphql_get, graphql_post, AskSchema};

/// Shared, read-only state handed to the endpoint handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub schema: AskSchema,
    pub config: Arc<GatewayConfig>,
}

/// Assemble the HTTP application: the GraphQL endpoint, a 404 fallback and
/// the dispatcher wrapped around both.
pub fn build_app(container: &Container) -> Result<axum::Router> {
    let config = container.config();
    validate_graphql_endpoint(&config.graphql_endpoint)?;
    let state = GatewayState {
        schema: container.schema(),
        config: config.clone(),
    };
    let cors = container.cors_policy()?;

    let app = axum::Router::new()
        .route(
            &config.graphql_endpoint,
            get(graphql_get).post(graphql_post),
        )
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(cors, dispatch));

    Ok(app)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Serve `app` on `addr` until Ctrl-C.
pub async fn serve(app: axum::Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("GraphQL gateway listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
