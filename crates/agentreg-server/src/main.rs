//! Binary entrypoint for the agent registry HTTP server.
//!
//! Configuration comes from flags or `AGENTREG_*` environment variables,
//! see [`ServerConfig`].

use std::process;

use clap::Parser;

use agentreg_server::config::ServerConfig;
use agentreg_server::logging;
use agentreg_server::router::build_router;
use agentreg_server::startup::prepare_service;
use agentreg_server::state::AppState;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();
    logging::init(config.log_json);

    let service = match prepare_service(&config) {
        Ok(service) => service,
        Err(err) => {
            tracing::error!(error = %err, "database required but unusable, exiting");
            process::exit(1);
        }
    };

    let app = build_router(AppState::new(service));

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(addr = %addr, error = %err, "failed to bind listener");
            process::exit(1);
        }
    };
    tracing::info!("server running on http://{}", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server terminated");
        process::exit(1);
    }
}
