//! Footer documents: nested rows and columns of blocks.

use serde::{Deserialize, Serialize};

use super::ConfigType;
use crate::models::Timestamp;
use crate::responsive::{
    BorderConfig, ColorReference, ContainerBehavior, ResponsiveValue, ShadowConfig,
};
use crate::schema::BlockInstance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterConfig {
    pub version: u32,
    pub deployment_id: String,
    pub config_type: ConfigType,
    pub sections: Vec<FooterSection>,
    pub style: FooterStyle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outer spacing shared by header and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLayout {
    pub margin: ResponsiveValue<String>,
    pub padding: ResponsiveValue<String>,
    pub section_gap: ResponsiveValue<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterLinkStyle {
    pub color: ColorReference,
    pub hover_color: ColorReference,
}

/// Footer-wide defaults; sections may override background, border, and padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterStyle {
    pub container: ContainerBehavior,
    pub layout: FooterLayout,
    pub background: ColorReference,
    pub text: ColorReference,
    pub link: FooterLinkStyle,
    pub border: ResponsiveValue<BorderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ResponsiveValue<ShadowConfig>>,
}

/// CSS `align-items` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexAlign {
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

/// CSS `justify-content` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlexJustify {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

/// `row` lays children out horizontally, `column` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSectionStyle {
    pub align: FlexAlign,
    pub justify: FlexJustify,
    /// CSS `flex`, e.g. `"1"` or `"0 1 auto"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<ResponsiveValue<BorderConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<ResponsiveValue<String>>,
}

/// Top-level section. Holds nested content sections, never blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterSection {
    pub id: String,
    /// Display position; lower comes first.
    pub order: f64,
    #[serde(rename = "type")]
    pub direction: SectionDirection,
    pub style: FooterSectionStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<FooterContentSection>>,
}

/// Leaf section holding blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContentSection {
    pub id: String,
    pub order: f64,
    #[serde(rename = "type")]
    pub direction: SectionDirection,
    pub style: FooterSectionStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<BlockInstance>>,
}
