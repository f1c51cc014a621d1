//! Application state with the shared `AgentService`.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` so handlers
//! await the lock without blocking the runtime. `rusqlite::Connection` is
//! `!Sync`, so an `RwLock` is not an option; the mutex also serializes every
//! statement on the single connection.

use std::sync::Arc;

use crate::error::ApiError;
use crate::service::AgentService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<tokio::sync::Mutex<AgentService>>,
}

impl AppState {
    pub fn new(service: AgentService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }

    /// Creates a bootstrapped `AppState` over an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let mut service = AgentService::in_memory()?;
        service.bootstrap()?;
        Ok(Self::new(service))
    }
}
