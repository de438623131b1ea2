//! Location Context - Aggregate Root

use super::{LocationDraft, LocationId};

/// Location 聚合根
///
/// 不变量:
/// - id 只能由存储层分配，创建后不可修改
/// - 没有更新操作，记录只会被整体删除
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: LocationId,
    title: String,
    latitude: f64,
    longitude: f64,
    description: String,
}

impl Location {
    /// 用已分配的标识符固化一个创建候选
    pub fn from_draft(id: LocationId, draft: LocationDraft) -> Self {
        Self {
            id,
            title: draft.title,
            latitude: draft.latitude,
            longitude: draft.longitude,
            description: draft.description,
        }
    }

    // Getters
    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// 取回不含标识符的内容
    pub fn to_draft(&self) -> LocationDraft {
        LocationDraft {
            title: self.title.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description.clone(),
        }
    }
}
