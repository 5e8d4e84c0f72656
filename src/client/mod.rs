//! HTTP client for the API Ninjas phone validation and world time endpoints.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`AsyncNinjasClient`]).

mod async_wrapper;
pub use async_wrapper::{AsyncNinjasClient, PhoneValidator, TimeLookup};

use crate::config::Config;
use crate::error::{ExternalApiError, ExternalApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{PhoneValidation, WorldTime};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the API Ninjas credential.
const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP client for API Ninjas.
///
/// This client uses `ureq` for synchronous HTTP requests. Anything other than
/// a `200 OK` answer is treated as a failure.
#[derive(Clone)]
pub struct NinjasClient {
    /// Base URL, e.g. `https://api.api-ninjas.com/v1`
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl NinjasClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute an authenticated GET and decode the JSON body.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> ExternalApiResult<T> {
        let timer = HttpTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set(API_KEY_HEADER, &self.api_key)
            .call()
            .map_err(|e| self.map_error(e))
            .and_then(|response| {
                let status = response.status();
                if status != 200 {
                    return Err(ExternalApiError::ApiError {
                        status,
                        message: response.status_text().to_string(),
                    });
                }
                let body = response
                    .into_string()
                    .map_err(|e| ExternalApiError::HttpError(e.to_string()))?;
                serde_json::from_str::<T>(&body).map_err(ExternalApiError::JsonError)
            });

        match &result {
            Ok(_) => timer.complete(),
            Err(e) => {
                tracing::error!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to an ExternalApiError.
    fn map_error(&self, error: ureq::Error) -> ExternalApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                ExternalApiError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ExternalApiError::HttpError("Connection failed".to_string())
                } else if Self::is_timeout(&transport) {
                    ExternalApiError::Timeout
                } else {
                    ExternalApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Only an I/O failure whose cause timed out counts as a timeout.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        transport.kind() == ureq::ErrorKind::Io
            && std::error::Error::source(transport)
                .and_then(|source| source.downcast_ref::<std::io::Error>())
                .is_some_and(|e| {
                    matches!(
                        e.kind(),
                        std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                    )
                })
    }

    /// Validate a phone number.
    ///
    /// An invalid number is a successful call with `is_valid == false`.
    pub fn validate_phone(&self, phone: &str) -> ExternalApiResult<PhoneValidation> {
        let path = format!("/validatephone?number={}", urlencoding::encode(phone));
        let validation: PhoneValidation = self.get_json(&path)?;
        self.metrics.record_phone_validation();
        Ok(validation)
    }

    /// Fetch the current date-time in a timezone.
    pub fn world_time(&self, timezone: &str) -> ExternalApiResult<WorldTime> {
        let path = format!("/worldtime?timezone={}", urlencoding::encode(timezone));
        let time: WorldTime = self.get_json(&path)?;
        self.metrics.record_time_lookup();
        Ok(time)
    }
}
