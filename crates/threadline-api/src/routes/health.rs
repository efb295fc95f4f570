//! Liveness endpoint, outside the `/api` prefix and the envelope.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// What `/health` reports: enough for a load balancer and a deploy check.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Always `"ok"` when the process can serve requests at all.
    pub status: &'static str,
    /// The serving crate, so probes can tell services apart.
    pub service: &'static str,
    /// Crate version baked in at build time.
    pub version: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
