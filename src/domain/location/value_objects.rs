//! Location Context - Value Objects

use serde::Serialize;

/// 位置点唯一标识
///
/// 由存储层分配，进程生命周期内单调递增，删除后不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocationId(i64);

impl LocationId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 创建候选
///
/// 客户端提交的位置点内容，不含标识符。不做任何校验：
/// 经纬度不限制在 [-90, 90] / [-180, 180] 范围内
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationDraft {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

impl LocationDraft {
    pub fn new(
        title: impl Into<String>,
        latitude: f64,
        longitude: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            latitude,
            longitude,
            description: description.into(),
        }
    }
}
