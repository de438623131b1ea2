//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping               GET     健康检查
//! - /api/locations          GET     列出所有位置点
//! - /api/locations          POST    创建位置点
//! - /api/locations/:id      GET     获取位置点详情
//! - /api/locations/:id      DELETE  删除位置点

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(location_routes())
}

/// Location 路由
fn location_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/locations",
            get(handlers::list_locations).post(handlers::create_location),
        )
        .route(
            "/locations/:id",
            get(handlers::get_location).delete(handlers::delete_location),
        )
}
