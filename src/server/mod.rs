//! HTTP server exposing the contacts GraphQL API.
//!
//! Routes:
//! - `GET|POST /graphql`: GraphQL endpoint
//! - `GET /graphiql`: GraphiQL explorer
//! - `GET /health`: liveness plus outbound call metrics

pub mod handlers;
pub mod schema;

pub use handlers::AppState;
pub use schema::{Context, Mutation, Query, Schema};

use crate::config::Config;
use crate::metrics::Metrics;
use crate::services::ContactService;
use anyhow::Result;
use axum::routing::get;
use axum::Router;
use juniper_axum::graphiql;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/graphql", get(handlers::graphql).post(handlers::graphql))
        .route("/graphiql", get(graphiql("/graphql", None::<&str>)))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn run_server(
    config: &Config,
    contacts: Arc<dyn ContactService>,
    metrics: Metrics,
) -> Result<()> {
    let app = build_router(AppState::new(contacts, metrics));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "Server ready at http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
