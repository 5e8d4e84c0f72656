//! Error types for the contacts GraphQL server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when calling the API Ninjas endpoints.
#[derive(Error, Debug)]
pub enum ExternalApiError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API answered with something other than 200 OK
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors raised by the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The driver reported a failure
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A unique index rejected the write
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A stored document could not be mapped to a contact
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Business errors returned by the contact service.
///
/// The display text of each variant is what API clients see, so none of them
/// carry upstream payloads or driver messages.
#[derive(Error, Debug)]
pub enum ContactError {
    /// `addContact` with a phone some contact already has
    #[error("Phone already exists")]
    DuplicatePhone,

    /// The validation service rejected the phone
    #[error("Invalid phone number")]
    InvalidPhone,

    /// `updateContact` with a phone owned by another contact
    #[error("Phone already taken by another contact")]
    PhoneTaken,

    /// `updateContact` without name or phone
    #[error("At least one of name or phone must be provided")]
    NoFieldsProvided,

    /// No contact with the requested id
    #[error("Contact not found")]
    NotFound,

    /// One of the external services failed
    #[error("{0}")]
    ExternalService(String),

    /// The store failed
    #[error("Internal storage error")]
    Storage(#[from] StoreError),
}

impl ContactError {
    /// Stable machine-readable code exposed in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicatePhone => "DUPLICATE_PHONE",
            Self::InvalidPhone => "INVALID_PHONE",
            Self::PhoneTaken => "PHONE_TAKEN",
            Self::NoFieldsProvided => "NO_FIELDS_PROVIDED",
            Self::NotFound => "NOT_FOUND",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Storage(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convenience type alias for Results with ExternalApiError
pub type ExternalApiResult<T> = Result<T, ExternalApiError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingVar("API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: API_KEY"
        );

        let err = ContactError::PhoneTaken;
        assert_eq!(err.to_string(), "Phone already taken by another contact");

        let err = ContactError::ExternalService("Phone validation service error".to_string());
        assert_eq!(err.to_string(), "Phone validation service error");
    }

    #[test]
    fn test_api_error_variants() {
        let err = ExternalApiError::ApiError {
            status: 502,
            message: "Bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("Bad gateway"));
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let err = ContactError::from(StoreError::Malformed("missing _id".to_string()));
        assert_eq!(err.to_string(), "Internal storage error");
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ContactError::DuplicatePhone.code(), "DUPLICATE_PHONE");
        assert_eq!(ContactError::InvalidPhone.code(), "INVALID_PHONE");
        assert_eq!(ContactError::NoFieldsProvided.code(), "NO_FIELDS_PROVIDED");
        assert_eq!(ContactError::NotFound.code(), "NOT_FOUND");
    }
}
