//! API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::Coordinates;
use crate::Error;

/// Health check with service status
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Record one location fix
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, (StatusCode, String)> {
    let id = state
        .ledger
        .submit(payload.common_id, payload.latitude, payload.longitude)
        .await
        .map_err(error_response)?;

    Ok(Json(SubmitResponse {
        message: "Data saved".to_string(),
        id,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub common_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub id: String,
}

/// Fetch the recorded path for one common_id
pub async fn fetch_path(
    State(state): State<AppState>,
    Path(common_id): Path<String>,
) -> Result<Json<PathResponse>, (StatusCode, String)> {
    let path = state
        .ledger
        .fetch_path(&common_id)
        .await
        .map_err(error_response)?;

    Ok(Json(PathResponse { common_id, path }))
}

#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub common_id: String,
    pub path: Vec<Coordinates>,
}

/// Map a ledger error to an HTTP status.
///
/// Store failures keep the driver detail in the server log; the caller
/// sees only the opaque kind.
fn error_response(err: Error) -> (StatusCode, String) {
    match err {
        Error::InvalidCoordinates => (StatusCode::BAD_REQUEST, err.to_string()),
        Error::PathNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
        Error::Store(detail) => {
            tracing::error!(error = %detail, "Store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Store operation failed".to_string(),
            )
        }
    }
}
