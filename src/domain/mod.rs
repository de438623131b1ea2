//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Location Context: 地理位置点管理

pub mod location;
