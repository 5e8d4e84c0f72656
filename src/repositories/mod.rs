mod mongo_contact_repository;
mod traits;

pub use mongo_contact_repository::MongoContactRepository;
pub use traits::ContactRepository;
