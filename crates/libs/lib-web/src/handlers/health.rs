//! # Health Handler
//!
//! Liveness probe. Reports that the HTTP layer is up; it deliberately does
//! not touch the database, which connects lazily and must not gate
//! liveness.

use axum::Json;
use serde::Serialize;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// **Route**: `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
