//! Path resolution results returned to the engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a requested path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathResolutionType {
    Redirect,
    Page,
    BlogPost,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResolutionResponse {
    pub path: String,
    #[serde(rename = "type")]
    pub resolution_type: PathResolutionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_key: Option<String>,
}
