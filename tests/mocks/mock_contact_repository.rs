use async_trait::async_trait;
use contacts_graphql::error::{StoreError, StoreResult};
use contacts_graphql::models::{Contact, ContactChanges, NewContact};
use contacts_graphql::repositories::ContactRepository;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// In-memory implementation of ContactRepository that assigns ObjectId-like
/// hex ids, enforces phone uniqueness like the unique index does, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<BTreeMap<String, Contact>>>,
    next_id: Arc<Mutex<u64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed a contact directly, bypassing the service. Returns its id.
    pub fn seed(&self, name: &str, phone: &str, country: &str, timezone: &str) -> String {
        let id = self.allocate_id();
        let contact = Contact {
            id: id.clone(),
            name: name.to_string(),
            phone: phone.to_string(),
            country: country.to_string(),
            timezone: timezone.to_string(),
        };
        self.contacts.lock().unwrap().insert(id.clone(), contact);
        id
    }

    /// Snapshot of a stored contact.
    pub fn stored(&self, id: &str) -> Option<Contact> {
        self.contacts.lock().unwrap().get(id).cloned()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn allocate_id(&self) -> String {
        let mut next = self.next_id.lock().unwrap();
        let id = format!("{:024x}", *next);
        *next += 1;
        id
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

/// `$set` semantics: only supplied fields are overwritten.
fn apply_changes(contact: &mut Contact, changes: ContactChanges) {
    if let Some(name) = changes.name {
        contact.name = name;
    }
    if let Some(phone) = changes.phone {
        contact.phone = phone;
    }
    if let Some(country) = changes.country {
        contact.country = country;
    }
    if let Some(timezone) = changes.timezone {
        contact.timezone = timezone;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all");
        Ok(self.contacts.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_id");
        Ok(self.contacts.lock().unwrap().get(id).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<Contact>> {
        self.track_call("find_by_phone");
        Ok(self
            .contacts
            .lock()
            .unwrap()
            .values()
            .find(|c| c.phone == phone)
            .cloned())
    }

    async fn insert(&self, contact: NewContact) -> StoreResult<Contact> {
        self.track_call("insert");

        if self
            .contacts
            .lock()
            .unwrap()
            .values()
            .any(|c| c.phone == contact.phone)
        {
            return Err(StoreError::DuplicateKey("phone".to_string()));
        }

        let contact = contact.into_contact(self.allocate_id());
        self.contacts
            .lock()
            .unwrap()
            .insert(contact.id.clone(), contact.clone());
        Ok(contact)
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: ContactChanges,
    ) -> StoreResult<Option<Contact>> {
        self.track_call("update_by_id");

        let mut contacts = self.contacts.lock().unwrap();

        if let Some(phone) = &changes.phone {
            if contacts.values().any(|c| c.id != id && &c.phone == phone) {
                return Err(StoreError::DuplicateKey("phone".to_string()));
            }
        }

        Ok(contacts.get_mut(id).map(|contact| {
            apply_changes(contact, changes);
            contact.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        self.track_call("delete_by_id");
        Ok(self.contacts.lock().unwrap().remove(id).map_or(0, |_| 1))
    }
}
