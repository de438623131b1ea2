//! Location HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{CreateLocation, DeleteLocation, GetLocation, ListLocations};
use crate::domain::location::LocationId;
use crate::infrastructure::http::dto::{LocationPayload, LocationResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取位置点列表
pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LocationResponse>>, ApiError> {
    let result = state.list_locations_handler.handle(ListLocations).await?;

    Ok(Json(result.into_iter().map(LocationResponse::from).collect()))
}

/// 获取位置点详情
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<LocationResponse>, ApiError> {
    let query = GetLocation {
        location_id: LocationId::new(id),
    };

    let result = state.get_location_handler.handle(query).await?;

    Ok(Json(LocationResponse::from(result)))
}

/// 创建位置点
pub async fn create_location(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LocationPayload>,
) -> Result<(StatusCode, Json<LocationResponse>), ApiError> {
    let command = CreateLocation {
        draft: payload.into(),
    };

    let result = state.create_location_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(LocationResponse::from(result))))
}

/// 删除位置点
pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let command = DeleteLocation {
        location_id: LocationId::new(id),
    };

    state.delete_location_handler.handle(command).await?;

    Ok(StatusCode::NO_CONTENT)
}
