use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactChanges, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

/// MongoDB error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Stored shape of a contact.
#[derive(Debug, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    phone: String,
    country: String,
    timezone: String,
}

impl From<&NewContact> for ContactDocument {
    fn from(contact: &NewContact) -> Self {
        Self {
            id: None,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            country: contact.country.clone(),
            timezone: contact.timezone.clone(),
        }
    }
}

impl TryFrom<ContactDocument> for Contact {
    type Error = StoreError;

    fn try_from(document: ContactDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| StoreError::Malformed("contact document without _id".to_string()))?;

        Ok(Contact {
            id: id.to_hex(),
            name: document.name,
            phone: document.phone,
            country: document.country,
            timezone: document.timezone,
        })
    }
}

/// Contact repository backed by a MongoDB collection.
pub struct MongoContactRepository {
    collection: Collection<ContactDocument>,
}

impl MongoContactRepository {
    /// Connect using the configured URL, verify the server answers and make
    /// sure the unique phone index exists.
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let options = ClientOptions::parse(&config.mongo_url).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&config.mongo_database);

        database.run_command(doc! { "ping": 1 }, None).await?;
        tracing::info!(
            database = %config.mongo_database,
            collection = %config.mongo_collection,
            "Connected to MongoDB"
        );

        let repository = Self::new(database.collection(&config.mongo_collection));
        repository.ensure_indexes().await?;
        Ok(repository)
    }

    fn new(collection: Collection<ContactDocument>) -> Self {
        Self { collection }
    }

    /// Create the unique index on `phone`, the storage-level backstop for the
    /// service's read-then-write uniqueness check.
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index, None).await?;
        Ok(())
    }

    /// Ids that are not valid ObjectIds can never match a document.
    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }

    fn map_write_error(error: mongodb::error::Error) -> StoreError {
        let duplicate = match error.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
            ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
            _ => false,
        };

        if duplicate {
            StoreError::DuplicateKey("phone".to_string())
        } else {
            StoreError::Database(error)
        }
    }

    fn set_document(changes: &ContactChanges) -> Document {
        let mut set = Document::new();
        if let Some(name) = &changes.name {
            set.insert("name", name.as_str());
        }
        if let Some(phone) = &changes.phone {
            set.insert("phone", phone.as_str());
        }
        if let Some(country) = &changes.country {
            set.insert("country", country.as_str());
        }
        if let Some(timezone) = &changes.timezone {
            set.insert("timezone", timezone.as_str());
        }
        set
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn find_all(&self) -> StoreResult<Vec<Contact>> {
        let documents: Vec<ContactDocument> =
            self.collection.find(None, None).await?.try_collect().await?;

        documents.into_iter().map(Contact::try_from).collect()
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Contact>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": oid }, None)
            .await?
            .map(Contact::try_from)
            .transpose()
    }

    async fn find_by_phone(&self, phone: &str) -> StoreResult<Option<Contact>> {
        self.collection
            .find_one(doc! { "phone": phone }, None)
            .await?
            .map(Contact::try_from)
            .transpose()
    }

    async fn insert(&self, contact: NewContact) -> StoreResult<Contact> {
        let document = ContactDocument::from(&contact);
        let result = self
            .collection
            .insert_one(&document, None)
            .await
            .map_err(Self::map_write_error)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Malformed("inserted id is not an ObjectId".to_string()))?;

        Ok(contact.into_contact(id.to_hex()))
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: ContactChanges,
    ) -> StoreResult<Option<Contact>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };

        let set = Self::set_document(&changes);

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set }, options)
            .await
            .map_err(Self::map_write_error)?
            .map(Contact::try_from)
            .transpose()
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(0);
        };

        let result = self.collection.delete_one(doc! { "_id": oid }, None).await?;
        Ok(result.deleted_count)
    }
}
