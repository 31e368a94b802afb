use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

/// GET /health - Liveness probe
///
/// Always answers `200 {"ok": true}`. Touches neither the store nor the static build,
/// so it stays green even when both are unavailable.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthDto { ok: true }))
}
