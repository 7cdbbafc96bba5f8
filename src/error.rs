use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{info, warn};

use crate::fault::FaultSite;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Produced only while bug mode is on; not a genuine failure.
    #[error("Internal Server Error: {0}")]
    SimulatedFault(FaultSite),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SimulatedFault(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        match &self {
            AppError::SimulatedFault(site) => {
                warn!(status = status.as_u16(), %site, simulated = true, "Simulated fault")
            }
            _ => info!(status = status.as_u16(), detail = %detail, "Client error"),
        }

        (
            status,
            Json(json!({
                "error": detail,
                "status_code": status.as_u16(),
            })),
        )
            .into_response()
    }
}
