//! Contacts GraphQL API.
//!
//! A GraphQL server over a MongoDB contacts collection. Every contact's phone
//! number is checked with the API Ninjas phone validation service, which also
//! supplies the contact's country and timezone; the current local time of a
//! contact is fetched from the API Ninjas world time service on demand.
//!
//! # Architecture
//!
//! - **models**: contact record, insert/update payloads, API Ninjas responses
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **client**: HTTP client for API Ninjas, with an async wrapper
//! - **metrics**: counters for outbound HTTP calls
//! - **repositories**: contact storage abstraction and its MongoDB implementation
//! - **services**: contact business rules (phone uniqueness, re-validation)
//! - **server**: juniper schema and the axum HTTP server

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::{AsyncNinjasClient, NinjasClient, PhoneValidator, TimeLookup};
pub use config::Config;
pub use error::{ConfigError, ContactError, ExternalApiError, StoreError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Contact, ContactChanges, NewContact, PhoneValidation, WorldTime};
pub use repositories::{ContactRepository, MongoContactRepository};
pub use services::{ContactService, ContactServiceImpl};
