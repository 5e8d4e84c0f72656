//! Test doubles shared by the integration tests.

mod mock_contact_repository;
mod mock_ninjas;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_ninjas::MockNinjas;

use contacts_graphql::client::{PhoneValidator, TimeLookup};
use contacts_graphql::repositories::ContactRepository;
use contacts_graphql::services::{ContactService, ContactServiceImpl};
use std::sync::Arc;

/// Wire a service over the given doubles.
#[allow(dead_code)]
pub fn service_with(repo: &MockContactRepository, ninjas: &MockNinjas) -> Arc<dyn ContactService> {
    Arc::new(ContactServiceImpl::new(
        Arc::new(repo.clone()) as Arc<dyn ContactRepository>,
        Arc::new(ninjas.clone()) as Arc<dyn PhoneValidator>,
        Arc::new(ninjas.clone()) as Arc<dyn TimeLookup>,
    ))
}
