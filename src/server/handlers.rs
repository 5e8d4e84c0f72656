//! axum handlers for the GraphQL endpoint and the health check.

use crate::metrics::{Metrics, MetricsSummary};
use crate::server::schema::{self, Context, Schema};
use crate::services::ContactService;
use axum::extract::State;
use axum::Json;
use juniper_axum::{extract::JuniperRequest, response::JuniperResponse};
use serde::Serialize;
use std::sync::Arc;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    schema: Arc<Schema>,
    context: Arc<Context>,
    metrics: Metrics,
}

impl AppState {
    pub fn new(contacts: Arc<dyn ContactService>, metrics: Metrics) -> Self {
        Self {
            schema: Arc::new(schema::schema()),
            context: Arc::new(Context::new(contacts)),
            metrics,
        }
    }
}

/// Execute a GraphQL request (single or batched, GET or POST).
pub async fn graphql(
    State(state): State<AppState>,
    JuniperRequest(request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse(request.execute(&*state.schema, &*state.context).await)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub metrics: MetricsSummary,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        metrics: state.metrics.summary(),
    })
}
