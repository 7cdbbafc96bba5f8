pub mod demo;
pub mod inventory;
pub mod orders;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::AppState;

pub const SERVICE_NAME: &str = "Demo E-Commerce API";

pub async fn root(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "service": SERVICE_NAME,
            "status": "running",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339(),
            "bug_mode": state.bug.is_enabled(),
        })),
    )
}

/// Never gated: monitoring must keep seeing the process as up.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    info!("Health check requested");
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "timestamp": Utc::now().to_rfc3339() })),
    )
}
