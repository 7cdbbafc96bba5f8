use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    fault::FaultSite,
    AppState,
};

pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    info!("Fetching all products");
    state.bug.check(FaultSite::Catalog)?;

    let products = state.catalog.products();

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": products.len(),
            "products": products,
        })),
    ))
}

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Path(id) = id.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    info!(id, "Fetching product");
    state.bug.check(FaultSite::Product(id))?;

    let product = state.catalog.product(id)?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "product": product,
        })),
    ))
}
