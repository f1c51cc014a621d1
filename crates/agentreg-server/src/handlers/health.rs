//! Liveness endpoint.

use axum::extract::State;
use axum::Json;

use crate::schema::common::HealthResponse;
use crate::state::AppState;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let available = state.service.lock().await.is_available();
    Json(HealthResponse {
        status: "ok",
        database: if available { "connected" } else { "unavailable" },
    })
}
