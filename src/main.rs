//! Contacts GraphQL API - main entry point

use anyhow::Result;
use contacts_graphql::client::{AsyncNinjasClient, PhoneValidator, TimeLookup};
use contacts_graphql::repositories::{ContactRepository, MongoContactRepository};
use contacts_graphql::services::{ContactService, ContactServiceImpl};
use contacts_graphql::{Config, NinjasClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    // Missing MONGO_URL or API_KEY is fatal
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = Arc::new(MongoContactRepository::connect(&config).await?)
        as Arc<dyn ContactRepository>;

    info!("Using API Ninjas at {}", config.api_base_url);
    let client = AsyncNinjasClient::new(NinjasClient::new(&config));
    let metrics = client.metrics().clone();
    let client = Arc::new(client);

    let service = Arc::new(ContactServiceImpl::new(
        repository,
        client.clone() as Arc<dyn PhoneValidator>,
        client as Arc<dyn TimeLookup>,
    )) as Arc<dyn ContactService>;

    contacts_graphql::server::run_server(&config, service, metrics).await?;

    info!("Server shutdown complete");
    Ok(())
}
