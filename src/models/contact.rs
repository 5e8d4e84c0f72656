//! Contact model and the payloads used to create and change it.

use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// `country` and `timezone` are derived from the phone validation response
/// that accepted `phone`; they are only ever written together with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Contact {
    /// Store-assigned identifier (hex form of the document id)
    pub id: String,

    /// Free-text display name
    pub name: String,

    /// Phone number, unique across all contacts
    pub phone: String,

    /// Country reported by the validation service
    pub country: String,

    /// First timezone reported by the validation service
    pub timezone: String,
}

/// Fields for a contact about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub country: String,
    pub timezone: String,
}

impl NewContact {
    /// Attach the id assigned by the store.
    pub fn into_contact(self, id: String) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            country: self.country,
            timezone: self.timezone,
        }
    }
}

/// Partial update of a contact. `None` leaves the stored field untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
}

impl ContactChanges {
    /// Change only the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
