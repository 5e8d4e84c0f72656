//! Async wrapper around the synchronous NinjasClient.
//!
//! The contact service depends on the [`PhoneValidator`] and [`TimeLookup`]
//! traits; [`AsyncNinjasClient`] implements both by running the blocking
//! `ureq` calls on tokio's blocking thread pool.

use crate::client::NinjasClient;
use crate::error::{ExternalApiError, ExternalApiResult};
use crate::metrics::Metrics;
use crate::models::{PhoneValidation, WorldTime};
use async_trait::async_trait;
use std::sync::Arc;

/// Validates phone numbers against an external service.
#[async_trait]
pub trait PhoneValidator: Send + Sync {
    async fn validate(&self, phone: &str) -> ExternalApiResult<PhoneValidation>;
}

/// Looks up the current time in a timezone.
#[async_trait]
pub trait TimeLookup: Send + Sync {
    async fn current_time(&self, timezone: &str) -> ExternalApiResult<WorldTime>;
}

/// Async wrapper around synchronous NinjasClient.
#[derive(Clone)]
pub struct AsyncNinjasClient {
    client: Arc<NinjasClient>,
}

impl AsyncNinjasClient {
    pub fn new(client: NinjasClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Metrics of the wrapped client.
    pub fn metrics(&self) -> &Metrics {
        self.client.metrics()
    }
}

#[async_trait]
impl PhoneValidator for AsyncNinjasClient {
    async fn validate(&self, phone: &str) -> ExternalApiResult<PhoneValidation> {
        let client = self.client.clone();
        let phone = phone.to_string();

        tokio::task::spawn_blocking(move || client.validate_phone(&phone))
            .await
            .map_err(|e| ExternalApiError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl TimeLookup for AsyncNinjasClient {
    async fn current_time(&self, timezone: &str) -> ExternalApiResult<WorldTime> {
        let client = self.client.clone();
        let timezone = timezone.to_string();

        tokio::task::spawn_blocking(move || client.world_time(&timezone))
            .await
            .map_err(|e| ExternalApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
