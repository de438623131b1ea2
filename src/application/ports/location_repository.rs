//! Location Repository Port - 出站端口
//!
//! 定义位置点存储的抽象接口
//! 具体实现在 infrastructure 层（当前只有内存实现）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::location::{Location, LocationDraft, LocationId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Location Repository Port
///
/// 不变量:
/// - 当前存储的所有 id 互不相同
/// - id 单调递增分配，删除后不复用
/// - 列表按插入顺序返回
#[async_trait]
pub trait LocationRepositoryPort: Send + Sync {
    /// 获取所有位置点（快照，与内部状态无关）
    async fn find_all(&self) -> Result<Vec<Location>, RepositoryError>;

    /// 根据 ID 查找位置点
    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, RepositoryError>;

    /// 分配新 id 并保存
    async fn create(&self, draft: LocationDraft) -> Result<Location, RepositoryError>;

    /// 删除位置点，返回是否确实删除了记录
    async fn delete(&self, id: LocationId) -> Result<bool, RepositoryError>;

    /// 当前记录数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
