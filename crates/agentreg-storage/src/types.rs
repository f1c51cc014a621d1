//! Row types returned by [`AgentStore`](crate::AgentStore).

use serde::{Deserialize, Serialize};

/// One row of the `agents` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Serial assigned by SQLite on insert.
    pub sr_number: i64,
    /// `None` only for rows written by something other than this service.
    pub agent_name: Option<String>,
    /// Set by the server at insert time.
    pub start_timestamp: Option<String>,
    /// Never written by this service.
    pub stop_timestamp: Option<String>,
}

/// Highest serial seen for one distinct agent name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMaxSerial {
    pub agent_name: String,
    pub max_sr_number: i64,
}

/// Result of inserting a new agent row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAgent {
    pub sr_number: i64,
    pub agent_name: String,
}

/// Result of deleting every row that carries a given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedAgents {
    pub agent_name: String,
    /// Number of rows removed; zero when nothing matched.
    pub changes: usize,
}

/// Outcome of [`AgentStore::bootstrap_users`](crate::AgentStore::bootstrap_users).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsersBootstrap {
    /// `true` when the default user row was inserted by this run.
    pub seeded: bool,
}
