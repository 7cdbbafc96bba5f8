use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    fault::FaultSite,
    models::CreateOrder,
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

/// Bad payloads are rejected before the bug gate, so a 400 never turns into a 500.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrder>, JsonRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    info!("Creating new order");

    let Json(payload) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    payload.validate()?;

    state.bug.check(FaultSite::Orders)?;

    let order = state.orders.write().await.create(payload.items);

    info!(
        id = order.id,
        order_number = %order.order_number,
        items = order.items.len(),
        "Created order"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "order": order,
        })),
    ))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    info!("Listing orders");
    state.bug.check(FaultSite::Orders)?;

    let book = state.orders.read().await;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": book.len(),
            "orders": book.all(),
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    info!(id, "Fetching order");
    state.bug.check(FaultSite::Orders)?;

    let book = state.orders.read().await;
    let order = book.get(id)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "order": order,
        })),
    ))
}
