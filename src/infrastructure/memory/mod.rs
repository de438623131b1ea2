//! Memory Layer - In-Memory State Management
//!
//! 实现 LocationRepositoryPort，整个进程的位置点数据都保存在内存中，重启即丢失

mod location_repository;

pub use location_repository::InMemoryLocationRepository;
