//! Geopoints - 地理位置点 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Location Context: 位置点实体与标识符
//!
//! 应用层 (application/):
//! - Ports: 端口定义（LocationRepository）
//! - Commands: CreateLocation, DeleteLocation
//! - Queries: GetLocation, ListLocations
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: /api/locations RESTful API
//! - Memory: 进程内位置点仓储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
