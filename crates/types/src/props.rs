//! Props handed to section and block components by the rendering engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::responsive::{ColorReference, ContainerBehavior, ResponsiveValue};

/// Settings every section accepts, keyed like the form-builder field ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionBaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<ResponsiveValue<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<ResponsiveValue<String>>,
    /// Background and foreground color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionComponentProps<C = Map<String, Value>> {
    pub config: C,
    /// Needed by sections that embed form blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockComponentProps<C = Map<String, Value>> {
    pub config: C,
}
