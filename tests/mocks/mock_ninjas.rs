use async_trait::async_trait;
use contacts_graphql::client::{PhoneValidator, TimeLookup};
use contacts_graphql::error::{ExternalApiError, ExternalApiResult};
use contacts_graphql::models::{PhoneValidation, WorldTime};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the API Ninjas client.
///
/// Phone numbers registered with `valid_phone` validate successfully; any
/// other number is reported invalid. `fail_with_status` makes every call fail
/// as if the upstream answered with that status.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNinjas {
    phones: Arc<Mutex<HashMap<String, PhoneValidation>>>,
    datetimes: Arc<Mutex<HashMap<String, String>>>,
    failure: Arc<Mutex<Option<u16>>>,
    validate_calls: Arc<Mutex<Vec<String>>>,
    time_calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockNinjas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `phone` validate with the given country and timezones.
    pub fn valid_phone(self, phone: &str, country: &str, timezones: &[&str]) -> Self {
        self.phones.lock().unwrap().insert(
            phone.to_string(),
            PhoneValidation {
                is_valid: true,
                country: country.to_string(),
                timezones: timezones.iter().map(|tz| tz.to_string()).collect(),
            },
        );
        self
    }

    /// Answer world time lookups for `timezone`.
    pub fn time_in(self, timezone: &str, datetime: &str) -> Self {
        self.datetimes
            .lock()
            .unwrap()
            .insert(timezone.to_string(), datetime.to_string());
        self
    }

    /// Fail every call with the given upstream status.
    pub fn fail_with_status(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    /// Phone numbers the validator was asked about, in order.
    pub fn validate_calls(&self) -> Vec<String> {
        self.validate_calls.lock().unwrap().clone()
    }

    /// Timezones the time lookup was asked about, in order.
    pub fn time_calls(&self) -> Vec<String> {
        self.time_calls.lock().unwrap().clone()
    }

    fn check_failure(&self) -> ExternalApiResult<()> {
        match *self.failure.lock().unwrap() {
            Some(status) => Err(ExternalApiError::ApiError {
                status,
                message: "upstream unavailable".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PhoneValidator for MockNinjas {
    async fn validate(&self, phone: &str) -> ExternalApiResult<PhoneValidation> {
        self.validate_calls.lock().unwrap().push(phone.to_string());
        self.check_failure()?;

        Ok(self
            .phones
            .lock()
            .unwrap()
            .get(phone)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl TimeLookup for MockNinjas {
    async fn current_time(&self, timezone: &str) -> ExternalApiResult<WorldTime> {
        self.time_calls.lock().unwrap().push(timezone.to_string());
        self.check_failure()?;

        let datetime = self
            .datetimes
            .lock()
            .unwrap()
            .get(timezone)
            .cloned()
            .ok_or_else(|| ExternalApiError::ApiError {
                status: 400,
                message: "unknown timezone".to_string(),
            })?;
        Ok(WorldTime { datetime })
    }
}
