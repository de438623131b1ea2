//! Location Context - 位置点限界上下文
//!
//! 职责:
//! - 位置点实体（标题、经纬度、描述）
//! - 标识符值对象
//! - 创建候选（LocationDraft）

mod aggregate;
mod value_objects;

pub use aggregate::Location;
pub use value_objects::{LocationDraft, LocationId};
