//! Data Transfer Objects

use serde::{Deserialize, Deserializer, Serialize};

use crate::application::LocationView;
use crate::domain::location::LocationDraft;

// ============================================================================
// Location DTOs
// ============================================================================

/// 创建位置点请求体
///
/// 客户端携带的 `id` 字段会被忽略；缺失或为 null 的字段取默认值，不做校验
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocationPayload {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// 前端把空输入的 `parseFloat` 结果（NaN）序列化成 null
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(de).map(Option::unwrap_or_default)
}

impl From<LocationPayload> for LocationDraft {
    fn from(payload: LocationPayload) -> Self {
        LocationDraft {
            title: payload.title,
            latitude: payload.latitude,
            longitude: payload.longitude,
            description: payload.description,
        }
    }
}

/// 位置点响应体
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: i64,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
}

impl From<LocationView> for LocationResponse {
    fn from(view: LocationView) -> Self {
        Self {
            id: view.id.as_i64(),
            title: view.title,
            latitude: view.latitude,
            longitude: view.longitude,
            description: view.description,
        }
    }
}
