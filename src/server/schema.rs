//! GraphQL schema: root query, root mutation and the `Contact` object.

use crate::error::ContactError;
use crate::models::Contact;
use crate::services::ContactService;
use juniper::{
    graphql_object, graphql_value, EmptySubscription, FieldError, IntoFieldError, RootNode,
    ScalarValue, ID,
};
use std::sync::Arc;

/// Shared by every resolver of every request.
#[derive(Clone)]
pub struct Context {
    contacts: Arc<dyn ContactService>,
}

impl Context {
    pub fn new(contacts: Arc<dyn ContactService>) -> Self {
        Self { contacts }
    }
}

impl juniper::Context for Context {}

// Message is the error's display text; `extensions.code` is stable for clients.
impl<S: ScalarValue> IntoFieldError<S> for ContactError {
    fn into_field_error(self) -> FieldError<S> {
        let code = self.code();
        FieldError::new(self, graphql_value!({ "code": code }))
    }
}

/// A person with a validated phone number.
#[graphql_object(context = Context)]
impl Contact {
    fn id(&self) -> ID {
        ID::new(self.id.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn phone(&self) -> &str {
        &self.phone
    }

    /// Country reported by the phone validation service.
    fn country(&self) -> &str {
        &self.country
    }

    /// IANA timezone reported by the phone validation service.
    fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Current date-time in the contact's timezone. Fetched on every read.
    async fn time(&self, context: &Context) -> Result<String, ContactError> {
        context.contacts.resolve_current_time(self).await
    }
}

pub struct Query;

#[graphql_object(context = Context)]
impl Query {
    /// All contacts.
    async fn list_contacts(context: &Context) -> Result<Vec<Contact>, ContactError> {
        context.contacts.list().await
    }

    /// A contact by id, or null if there is none.
    async fn get_contact(context: &Context, id: ID) -> Result<Option<Contact>, ContactError> {
        context.contacts.get(&id).await
    }
}

pub struct Mutation;

#[graphql_object(context = Context)]
impl Mutation {
    /// Create a contact. The phone must be unused and pass validation.
    async fn add_contact(
        context: &Context,
        name: String,
        phone: String,
    ) -> Result<Contact, ContactError> {
        context.contacts.add(name, phone).await
    }

    /// Change name and/or phone. A new phone is re-validated.
    async fn update_contact(
        context: &Context,
        id: ID,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<Contact, ContactError> {
        context.contacts.update(&id, name, phone).await
    }

    /// Delete a contact; true if it existed.
    async fn delete_contact(context: &Context, id: ID) -> Result<bool, ContactError> {
        context.contacts.delete(&id).await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<Context>>;

/// Build the schema served at `/graphql`.
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_extensions_carry_code() {
        let error: FieldError = ContactError::PhoneTaken.into_field_error();
        assert_eq!(error.message(), "Phone already taken by another contact");
        assert_eq!(error.extensions(), &graphql_value!({ "code": "PHONE_TAKEN" }));
    }
}
