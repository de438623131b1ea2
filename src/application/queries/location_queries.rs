//! Location Queries

use crate::domain::location::LocationId;

/// 获取位置点详情查询
#[derive(Debug, Clone)]
pub struct GetLocation {
    pub location_id: LocationId,
}

/// 列出所有位置点查询
#[derive(Debug, Clone)]
pub struct ListLocations;
