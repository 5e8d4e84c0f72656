//! Response bodies of the API Ninjas endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /validatephone`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PhoneValidation {
    /// Whether the number is a real, dialable phone number
    pub is_valid: bool,

    /// Country the number belongs to
    #[serde(default)]
    pub country: String,

    /// Candidate timezones, most likely first
    #[serde(default)]
    pub timezones: Vec<String>,
}

impl PhoneValidation {
    /// The timezone a contact keeps: the first candidate.
    pub fn primary_timezone(&self) -> Option<&str> {
        self.timezones.first().map(String::as_str)
    }
}

/// Body of `GET /worldtime`. Only `datetime` is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldTime {
    pub datetime: String,
}
