use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{error::AppResult, fault::FaultSite, models::LOW_STOCK_THRESHOLD, AppState};

pub async fn get_inventory(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    info!("Checking inventory");
    state.bug.check(FaultSite::Inventory)?;

    let catalog = &state.catalog;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "inventory": catalog.inventory(),
            "total_items": catalog.total_items(),
            "low_stock_items": catalog.low_stock(LOW_STOCK_THRESHOLD),
        })),
    ))
}
