//! Startup sequence: open the database, then bootstrap the `Users` table.
//!
//! Both steps log their outcome. A failure only aborts startup when
//! `require_database` is set; otherwise the server comes up degraded and
//! every agent endpoint answers 500.

use agentreg_storage::schema::DEFAULT_USER_NAME;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::service::AgentService;

/// Builds the service the router will share.
pub fn prepare_service(config: &ServerConfig) -> Result<AgentService, ApiError> {
    let mut service = match AgentService::open(&config.db_path) {
        Ok(service) => {
            tracing::info!(path = %config.db_path, "connected to SQLite database");
            service
        }
        Err(err) if config.require_database => return Err(err),
        Err(err) => AgentService::unavailable(err.to_string()),
    };

    match service.bootstrap() {
        Ok(report) => {
            tracing::info!("Users table is ready");
            if report.seeded {
                tracing::info!("default user {} inserted", DEFAULT_USER_NAME);
            }
        }
        Err(err) => {
            if let ApiError::Unavailable(reason) = &err {
                tracing::error!(error = %reason, "Error creating Users table");
            }
            if config.require_database {
                return Err(err);
            }
        }
    }

    Ok(service)
}
