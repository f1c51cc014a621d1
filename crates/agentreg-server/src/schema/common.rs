//! Common API response wrapper types.

use serde::Serialize;

/// Standard envelope for successful responses: `{"data": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(data: T) -> Self {
        DataResponse { data }
    }
}

/// Liveness report for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// `"connected"` or `"unavailable"`.
    pub database: &'static str,
}
