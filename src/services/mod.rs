//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between the
//! contact repository and the external API clients. They provide a clean
//! boundary between the GraphQL resolvers and the data access layer.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
