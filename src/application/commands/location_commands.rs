//! Location Commands

use crate::domain::location::{LocationDraft, LocationId};

/// 创建位置点命令
#[derive(Debug, Clone)]
pub struct CreateLocation {
    pub draft: LocationDraft,
}

/// 删除位置点命令
#[derive(Debug, Clone)]
pub struct DeleteLocation {
    pub location_id: LocationId,
}
