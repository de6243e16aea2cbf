//! Root status endpoint.

use axum::Json;
use serde::Serialize;

/// Payload returned from `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl RootResponse {
    pub const ALIVE: RootResponse = RootResponse {
        status: "ok",
        message: "Eva is alive on Cloud Run",
    };
}

pub async fn index() -> Json<RootResponse> {
    Json(RootResponse::ALIVE)
}
