//! Router assembly for the agents HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with panic
//! catching, CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive: any origin, method and header.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/agents",
            get(handlers::agents::list_agents)
                .post(handlers::agents::create_agent)
                .delete(handlers::agents::delete_agent),
        )
        .route(
            "/api/agents/max-sr",
            get(handlers::agents::list_agents_max_sr),
        )
        .route("/health", get(handlers::health::health))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
