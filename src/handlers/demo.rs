//! Administrative switches for the bug simulator. None of these are gated.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::{fault::BugMode, AppState};

pub async fn enable_bug(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let mode = state.bug.enable();
    (
        StatusCode::OK,
        Json(json!({ "message": "Bug mode enabled", "enabled": true, "mode": mode })),
    )
}

pub async fn disable_bug(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let mode = state.bug.disable();
    (
        StatusCode::OK,
        Json(json!({ "message": "Bug mode disabled", "enabled": false, "mode": mode })),
    )
}

pub async fn status(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let mode = state.bug.mode();
    let message = match mode {
        BugMode::Faulted => "API will return 500 errors",
        BugMode::Healthy => "API is operating normally",
    };
    (
        StatusCode::OK,
        Json(json!({
            "enabled": mode == BugMode::Faulted,
            "mode": mode,
            "message": message,
        })),
    )
}
