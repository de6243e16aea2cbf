//! Health check endpoint for container orchestration.
//!
//! Cloud Run polls this route to decide whether the instance keeps receiving
//! traffic. It only proves the process can answer HTTP.

use axum::Json;

/// Constant health answer, serialized as the JSON string `"ok"`.
pub const HEALTH_OK: &str = "ok";

pub async fn healthz() -> Json<&'static str> {
    Json(HEALTH_OK)
}
