//! In-Memory Location Repository Implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::ports::{LocationRepositoryPort, RepositoryError};
use crate::domain::location::{Location, LocationDraft, LocationId};

/// 启动时预置的示例位置点（id 1-3）
const SAMPLE_LOCATIONS: &[(&str, f64, f64, &str)] = &[
    ("Seoul Tower", 37.5512, 126.9882, "Famous landmark in Seoul"),
    ("Gangnam Station", 37.4979, 127.0276, "Busy metro station"),
    ("Gyeongbokgung Palace", 37.5788, 126.9770, "Historic palace"),
];

/// 锁内状态：分配 id 与追加记录必须在同一个写锁内完成
struct LocationTable {
    /// 按插入顺序保存
    locations: Vec<Location>,
    /// 下一个待分配的 id
    next_id: i64,
}

impl LocationTable {
    fn insert(&mut self, draft: LocationDraft) -> Location {
        let id = LocationId::new(self.next_id);
        self.next_id += 1;
        let location = Location::from_draft(id, draft);
        self.locations.push(location.clone());
        location
    }
}

/// 内存位置点仓储
pub struct InMemoryLocationRepository {
    table: RwLock<LocationTable>,
}

impl InMemoryLocationRepository {
    /// 空仓储，第一个分配的 id 为 1
    pub fn new() -> Self {
        Self::from_table(LocationTable {
            locations: Vec::new(),
            next_id: 1,
        })
    }

    /// 预置三个示例位置点，计数器从 4 开始
    pub fn with_samples() -> Self {
        let mut table = LocationTable {
            locations: Vec::with_capacity(SAMPLE_LOCATIONS.len()),
            next_id: 1,
        };
        for (title, latitude, longitude, description) in SAMPLE_LOCATIONS {
            table.insert(LocationDraft::new(*title, *latitude, *longitude, *description));
        }
        Self::from_table(table)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn from_table(table: LocationTable) -> Self {
        Self {
            table: RwLock::new(table),
        }
    }
}

impl Default for InMemoryLocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationRepositoryPort for InMemoryLocationRepository {
    async fn find_all(&self) -> Result<Vec<Location>, RepositoryError> {
        Ok(self.table.read().await.locations.clone())
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, RepositoryError> {
        let table = self.table.read().await;
        Ok(table.locations.iter().find(|l| l.id() == id).cloned())
    }

    async fn create(&self, draft: LocationDraft) -> Result<Location, RepositoryError> {
        let location = self.table.write().await.insert(draft);
        tracing::debug!(location_id = %location.id(), "Location stored");
        Ok(location)
    }

    async fn delete(&self, id: LocationId) -> Result<bool, RepositoryError> {
        let mut table = self.table.write().await;
        let before = table.locations.len();
        table.locations.retain(|l| l.id() != id);
        let removed = table.locations.len() != before;
        tracing::debug!(location_id = %id, removed = removed, "Location delete requested");
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.table.read().await.locations.len())
    }
}
