//! AgentService: the single coordinator between HTTP handlers and the
//! storage crate.
//!
//! Handlers stay thin and delegate here. The service owns the only
//! [`AgentStore`], or the reason it could not be opened when the server is
//! running degraded.

use agentreg_storage::{AgentRecord, AgentStore, CreatedAgent, DeletedAgents, UsersBootstrap};

use crate::acronym::derive_acronym;
use crate::error::ApiError;
use crate::schema::agents::AgentMaxSrView;

/// Error returned when a request omits `agent_name` or sends it empty.
pub const AGENT_NAME_REQUIRED: &str = "agent_name is required";

enum Backend {
    Ready(AgentStore),
    Unavailable(String),
}

/// Business logic for the agents API.
pub struct AgentService {
    backend: Backend,
}

impl AgentService {
    /// Opens the existing database file at `db_path`.
    pub fn open(db_path: &str) -> Result<Self, ApiError> {
        let store = AgentStore::open(db_path)
            .map_err(|err| ApiError::storage("Error opening database", err))?;
        Ok(Self::with_store(store))
    }

    /// Creates a service over an in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = AgentStore::in_memory()
            .map_err(|err| ApiError::storage("Error opening in-memory database", err))?;
        Ok(Self::with_store(store))
    }

    pub fn with_store(store: AgentStore) -> Self {
        AgentService {
            backend: Backend::Ready(store),
        }
    }

    /// A service with no database. Every storage call fails with `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        AgentService {
            backend: Backend::Unavailable(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Ensures the `Users` table and its default row exist.
    ///
    /// Errors are returned, not swallowed; the caller decides whether the
    /// process keeps running.
    pub fn bootstrap(&mut self) -> Result<UsersBootstrap, ApiError> {
        match &mut self.backend {
            Backend::Ready(store) => store
                .bootstrap_users()
                .map_err(|err| ApiError::storage("Error creating Users table", err)),
            Backend::Unavailable(reason) => Err(ApiError::Unavailable(reason.clone())),
        }
    }

    pub fn list_agents(&self) -> Result<Vec<AgentRecord>, ApiError> {
        self.store("Error querying agents")?
            .list_agents()
            .map_err(|err| ApiError::storage("Error querying agents", err))
    }

    /// Distinct agent names with their highest serial and acronym.
    pub fn list_max_serials(&self) -> Result<Vec<AgentMaxSrView>, ApiError> {
        const CONTEXT: &str = "Error querying max sr_number for agents";
        let groups = self
            .store(CONTEXT)?
            .list_max_serials()
            .map_err(|err| ApiError::storage(CONTEXT, err))?;

        Ok(groups
            .into_iter()
            .map(|group| AgentMaxSrView {
                short_name: derive_acronym(&group.agent_name),
                agent_name: group.agent_name,
                max_sr_number: group.max_sr_number,
            })
            .collect())
    }

    pub fn create_agent(&self, agent_name: Option<String>) -> Result<CreatedAgent, ApiError> {
        let agent_name = require_agent_name(agent_name)?;
        let created = self
            .store("Error adding agent")?
            .create_agent(&agent_name)
            .map_err(|err| ApiError::storage("Error adding agent", err))?;
        tracing::debug!(sr_number = created.sr_number, agent_name = %created.agent_name, "agent added");
        Ok(created)
    }

    /// Removes every agent row named `agent_name`.
    pub fn delete_agents(&self, agent_name: Option<String>) -> Result<DeletedAgents, ApiError> {
        let agent_name = require_agent_name(agent_name)?;
        let deleted = self
            .store("Error removing agent")?
            .delete_agents(&agent_name)
            .map_err(|err| ApiError::storage("Error removing agent", err))?;
        tracing::debug!(agent_name = %deleted.agent_name, changes = deleted.changes, "agents removed");
        Ok(deleted)
    }

    fn store(&self, context: &str) -> Result<&AgentStore, ApiError> {
        match &self.backend {
            Backend::Ready(store) => Ok(store),
            Backend::Unavailable(reason) => {
                tracing::error!(error = %reason, "{}", context);
                Err(ApiError::Unavailable(reason.clone()))
            }
        }
    }
}

/// Only absent and empty names are rejected; whitespace passes.
fn require_agent_name(agent_name: Option<String>) -> Result<String, ApiError> {
    match agent_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ApiError::BadRequest(AGENT_NAME_REQUIRED.to_string())),
    }
}
