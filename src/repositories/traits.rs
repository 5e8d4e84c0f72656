use crate::error::StoreResult;
use crate::models::{Contact, ContactChanges, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (MongoDB, in-memory test doubles). Every operation touches
/// a single document. Ids that the store cannot parse simply match nothing.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// All stored contacts, in store order.
    async fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Contact>>;

    /// Retrieve the contact owning `phone`, if any.
    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<Contact>>;

    /// Insert a new contact; the store assigns its id.
    async fn insert(&self, contact: NewContact) -> StoreResult<Contact>;

    /// Apply a partial update and return the updated contact.
    async fn update_by_id(&self, id: &str, changes: ContactChanges)
        -> StoreResult<Option<Contact>>;

    /// Delete a contact, returning how many records were removed (0 or 1).
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64>;
}
