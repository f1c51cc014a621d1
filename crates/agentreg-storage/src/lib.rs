//! SQLite storage for the agent registry.
//!
//! Provides [`AgentStore`], the single long-lived connection that backs the
//! HTTP API, together with the `Users` schema bootstrap.
//!
//! # Modules
//!
//! - [`error`]: StorageError with open and statement failures
//! - [`types`]: row types returned by the store
//! - [`schema`]: SQL constants, open flags and the `Users` bootstrap
//! - [`store`]: AgentStore queries over the `agents` table

pub mod error;
pub mod schema;
pub mod store;
pub mod types;

pub use error::StorageError;
pub use store::AgentStore;
pub use types::{AgentMaxSerial, AgentRecord, CreatedAgent, DeletedAgents, UsersBootstrap};
