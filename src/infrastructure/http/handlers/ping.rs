//! Ping Handler
//!
//! Health check endpoint, also reports how many locations are live

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub locations: usize,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    let locations = state
        .location_repo
        .count()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        locations,
    }))
}
