//! Schema types for the agents API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/agents` and `DELETE /api/agents`.
///
/// `agent_name` is optional at the type level so a missing field reaches
/// validation and yields a 400 instead of an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentNameRequest {
    #[serde(default)]
    pub agent_name: Option<String>,
}

/// One group returned by `GET /api/agents/max-sr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentMaxSrView {
    pub agent_name: String,
    pub max_sr_number: i64,
    /// Acronym derived from `agent_name`; never stored.
    pub short_name: String,
}
