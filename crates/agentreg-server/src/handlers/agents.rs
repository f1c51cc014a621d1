//! Agent listing, creation and removal handlers.

use agentreg_storage::{AgentRecord, CreatedAgent, DeletedAgents};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;

use crate::error::ApiError;
use crate::schema::agents::{AgentMaxSrView, AgentNameRequest};
use crate::schema::common::DataResponse;
use crate::state::AppState;

/// `GET /api/agents`
pub async fn list_agents(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<AgentRecord>>>, ApiError> {
    let service = state.service.lock().await;
    let agents = service.list_agents()?;
    Ok(Json(DataResponse::ok(agents)))
}

/// `GET /api/agents/max-sr`
pub async fn list_agents_max_sr(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<AgentMaxSrView>>>, ApiError> {
    let service = state.service.lock().await;
    let groups = service.list_max_serials()?;
    Ok(Json(DataResponse::ok(groups)))
}

/// `POST /api/agents`
pub async fn create_agent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DataResponse<CreatedAgent>>, ApiError> {
    let req = agent_name_request(&headers, &body)?;
    let service = state.service.lock().await;
    let created = service.create_agent(req.agent_name)?;
    Ok(Json(DataResponse::ok(created)))
}

/// `DELETE /api/agents`
pub async fn delete_agent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DataResponse<DeletedAgents>>, ApiError> {
    let req = agent_name_request(&headers, &body)?;
    let service = state.service.lock().await;
    let deleted = service.delete_agents(req.agent_name)?;
    Ok(Json(DataResponse::ok(deleted)))
}

/// Decodes the `agent_name` body. A request without a JSON content type or
/// with an empty body counts as `{}`, so it fails validation like a body
/// that omits `agent_name`.
fn agent_name_request(headers: &HeaderMap, body: &Bytes) -> Result<AgentNameRequest, ApiError> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Ok(AgentNameRequest::default());
    }
    match Json::<AgentNameRequest>::from_bytes(body) {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected agent request body");
            Err(rejection.into())
        }
    }
}

/// `application/json` or any `+json` suffix, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
