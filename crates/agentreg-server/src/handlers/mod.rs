//! HTTP handler modules for the agents API.
//!
//! Handlers parse the request, acquire the service lock, delegate to
//! [`AgentService`](crate::service::AgentService), and wrap the result in
//! the JSON envelope. No business logic lives in handlers.

pub mod agents;
pub mod health;
