//! Command-line and environment configuration for the server binary.

use clap::Parser;

/// Agent registry HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "agentreg-server", about = "HTTP API over the agents table")]
pub struct ServerConfig {
    /// Path to an existing SQLite database file. It is never created.
    #[arg(long, env = "AGENTREG_DB_PATH", default_value = "agents_data.db")]
    pub db_path: String,

    /// Interface to listen on.
    #[arg(long, env = "AGENTREG_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "AGENTREG_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Emit logs as JSON lines.
    #[arg(long, env = "AGENTREG_LOG_JSON")]
    pub log_json: bool,

    /// Exit instead of serving degraded when the database cannot be opened
    /// or bootstrapped.
    #[arg(long, env = "AGENTREG_REQUIRE_DATABASE")]
    pub require_database: bool,
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
