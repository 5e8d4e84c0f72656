//! Data models for contacts and the API Ninjas responses.

pub mod contact;
pub mod ninjas;

pub use contact::{Contact, ContactChanges, NewContact};
pub use ninjas::{PhoneValidation, WorldTime};
