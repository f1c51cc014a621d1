//! Request and response bodies for the agents API.
//!
//! [`agents`] holds the `agent_name` body and the max-sr view;
//! [`common`] holds the `{"data": ...}` envelope and the health report.

pub mod agents;
pub mod common;
