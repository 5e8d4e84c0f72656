//! Contact service layer.
//!
//! Business logic for creating, changing, deleting and reading contacts.
//! Phone numbers are validated against the external service only when a
//! phone is being set for the first time or actually changes.

use crate::client::{PhoneValidator, TimeLookup};
use crate::error::{ContactError, ContactResult, ExternalApiError, StoreError};
use crate::models::{Contact, ContactChanges, NewContact, PhoneValidation};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, warn};

const PHONE_SERVICE_ERROR: &str = "Phone validation service error";
const TIME_SERVICE_ERROR: &str = "World time service error";

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts, unfiltered.
    async fn list(&self) -> ContactResult<Vec<Contact>>;

    /// A single contact; `None` when no contact has this id.
    async fn get(&self, id: &str) -> ContactResult<Option<Contact>>;

    /// Validate `phone` and store a new contact.
    async fn add(&self, name: String, phone: String) -> ContactResult<Contact>;

    /// Change a contact's name and/or phone.
    ///
    /// A missing name always leaves the stored name untouched.
    async fn update(
        &self,
        id: &str,
        name: Option<String>,
        phone: Option<String>,
    ) -> ContactResult<Contact>;

    /// Remove a contact; `true` if exactly one record was removed.
    async fn delete(&self, id: &str) -> ContactResult<bool>;

    /// Current date-time in the contact's timezone, fetched on every call.
    async fn resolve_current_time(&self, contact: &Contact) -> ContactResult<String>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    validator: Arc<dyn PhoneValidator>,
    time_lookup: Arc<dyn TimeLookup>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        validator: Arc<dyn PhoneValidator>,
        time_lookup: Arc<dyn TimeLookup>,
    ) -> Self {
        Self {
            repository,
            validator,
            time_lookup,
        }
    }

    /// Empty strings count as "not supplied".
    fn supplied(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty())
    }

    /// Ask the validation service about `phone` and return the accepted
    /// validation together with its primary timezone.
    async fn validate_phone(&self, phone: &str) -> ContactResult<(PhoneValidation, String)> {
        let validation = self
            .validator
            .validate(phone)
            .await
            .map_err(|e| external_error(PHONE_SERVICE_ERROR, e))?;

        if !validation.is_valid {
            warn!(phone = %phone, "Phone rejected by validation service");
            return Err(ContactError::InvalidPhone);
        }

        let timezone = match validation.primary_timezone() {
            Some(tz) => tz.to_string(),
            None => {
                warn!(phone = %phone, "Valid phone without any timezone");
                return Err(ContactError::InvalidPhone);
            }
        };

        Ok((validation, timezone))
    }

    async fn update_name(&self, id: &str, name: String) -> ContactResult<Contact> {
        self.repository
            .update_by_id(id, ContactChanges::name(name))
            .await?
            .ok_or(ContactError::NotFound)
    }
}

fn external_error(message: &str, cause: ExternalApiError) -> ContactError {
    error!(error = %cause, "{}", message);
    ContactError::ExternalService(message.to_string())
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list(&self) -> ContactResult<Vec<Contact>> {
        Ok(self.repository.find_all().await?)
    }

    async fn get(&self, id: &str) -> ContactResult<Option<Contact>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn add(&self, name: String, phone: String) -> ContactResult<Contact> {
        if self.repository.find_by_phone(&phone).await?.is_some() {
            warn!(phone = %phone, "Rejecting contact with duplicate phone");
            return Err(ContactError::DuplicatePhone);
        }

        let (validation, timezone) = self.validate_phone(&phone).await?;

        let contact = self
            .repository
            .insert(NewContact {
                name,
                phone,
                country: validation.country,
                timezone,
            })
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey(_) => ContactError::DuplicatePhone,
                other => ContactError::Storage(other),
            })?;

        debug!(id = %contact.id, "Contact created");
        Ok(contact)
    }

    async fn update(
        &self,
        id: &str,
        name: Option<String>,
        phone: Option<String>,
    ) -> ContactResult<Contact> {
        let (name, phone) = match (Self::supplied(name), Self::supplied(phone)) {
            (None, None) => return Err(ContactError::NoFieldsProvided),
            (Some(name), None) => {
                debug!(id = %id, "Updating name only");
                return self.update_name(id, name).await;
            }
            (name, Some(phone)) => (name, phone),
        };

        if let Some(owner) = self.repository.find_by_phone(&phone).await? {
            if owner.id != id {
                warn!(id = %id, owner = %owner.id, "Phone already owned by another contact");
                return Err(ContactError::PhoneTaken);
            }

            // Same phone re-submitted by its owner: nothing to re-validate
            debug!(id = %id, "Phone unchanged, updating name only");
            let name = name.unwrap_or(owner.name);
            return self.update_name(id, name).await;
        }

        debug!(id = %id, "Phone changed, re-validating");
        let (validation, timezone) = self.validate_phone(&phone).await?;

        let changes = ContactChanges {
            name,
            phone: Some(phone),
            country: Some(validation.country),
            timezone: Some(timezone),
        };

        self.repository
            .update_by_id(id, changes)
            .await
            .map_err(|e| match e {
                StoreError::DuplicateKey(_) => ContactError::PhoneTaken,
                other => ContactError::Storage(other),
            })?
            .ok_or(ContactError::NotFound)
    }

    async fn delete(&self, id: &str) -> ContactResult<bool> {
        let removed = self.repository.delete_by_id(id).await?;
        Ok(removed == 1)
    }

    async fn resolve_current_time(&self, contact: &Contact) -> ContactResult<String> {
        let time = self
            .time_lookup
            .current_time(&contact.timezone)
            .await
            .map_err(|e| external_error(TIME_SERVICE_ERROR, e))?;

        Ok(time.datetime)
    }
}
