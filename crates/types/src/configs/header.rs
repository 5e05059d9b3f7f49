//! Header documents: sections of navigation items and their dropdowns.
//!
//! Navigation items and dropdown content carry a `type` next to an untyped
//! `config` object on the wire. Both are decoded into a typed config chosen
//! by `type`, so a `link` item always holds a [`LinkItemConfig`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ConfigType, FlexAlign, FlexJustify, FooterLayout, FooterLinkStyle};
use crate::api::LocalizedText;
use crate::error::SchemaError;
use crate::models::Timestamp;
use crate::responsive::{
    BorderConfig, ColorReference, ContainerBehavior, ResponsiveValue, ShadowConfig,
};

pub type HeaderLayout = FooterLayout;
pub type HeaderLinkStyle = FooterLinkStyle;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderConfig {
    pub version: u32,
    pub deployment_id: String,
    /// `header`, or the legacy `navigation`.
    pub config_type: ConfigType,
    pub logo: HeaderLogo,
    /// Section that collapses into the burger menu on small screens.
    #[serde(rename = "togglerSectionId")]
    pub toggler_section_id: String,
    pub sections: Vec<HeaderSection>,
    pub style: HeaderStyle,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderLogo {
    pub alt: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyleType {
    Default,
    Minimal,
}

/// `static` stays in normal flow; `fixed` sticks to the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPosition {
    Static,
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderStyle {
    #[serde(rename = "type")]
    pub style_type: HeaderStyleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<HeaderPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerBehavior>,
    /// Area behind the header where no content is placed, e.g. `"3rem"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_zone: Option<ResponsiveValue<String>>,
    pub layout: HeaderLayout,
    pub background: ColorReference,
    pub text: ColorReference,
    pub logo_text: ColorReference,
    pub link: HeaderLinkStyle,
    pub border: ResponsiveValue<BorderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ResponsiveValue<ShadowConfig>>,
    pub burger: BurgerStyle,
    pub dropdown: DropdownStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurgerStyle {
    pub button: BurgerButtonStyle,
    pub icon: BurgerIconStyle,
    pub toggle_icon: ToggleIconConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_button: Option<ToggleButtonConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurgerButtonStyle {
    pub background: ColorReference,
    pub background_hover: ColorReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurgerIconStyle {
    pub color: ColorReference,
    pub hover_color: ColorReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownStyle {
    pub background: ColorReference,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderConfig>,
    pub text_color: ColorReference,
    pub link: DropdownLinkStyle,
    pub section_gap: ResponsiveValue<String>,
    pub offset: DropdownOffset,
    pub padding: ResponsiveValue<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ResponsiveValue<ShadowConfig>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownLinkStyle {
    pub background: ColorReference,
    pub color: ColorReference,
    pub hover_background: ColorReference,
    pub hover_color: ColorReference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOffset {
    pub left: ResponsiveValue<String>,
    pub right: ResponsiveValue<String>,
    pub y: ResponsiveValue<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleIconType {
    Hamburger,
    Kebab,
    Meatballs,
    Grid,
    Plus,
    Chevron,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleAnimationTiming {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Spring,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleIconConfig {
    #[serde(rename = "type")]
    pub icon_type: ToggleIconType,
    /// Milliseconds. The renderer uses 300 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<f64>,
    /// The renderer uses `ease-in-out` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_timing: Option<ToggleAnimationTiming>,
    /// Pixels. The renderer uses 24 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// The button wrapping the toggle icon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleButtonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSection {
    pub id: String,
    pub order: f64,
    pub align: FlexAlign,
    pub justify: FlexJustify,
    pub flex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<HeaderNavigationItem>>,
    /// Hide the section when it has no visible items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_when_empty: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationItemKind {
    Logo,
    Link,
    Button,
    Dropdown,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropdownPosition {
    Left,
    Right,
    Center,
}

/// Logo items take no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoItemConfig {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItemConfig {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonItemConfig {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

/// A dropdown panel, used by navigation items and nested dropdown content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub content: Vec<HeaderDropdownContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<DropdownPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItemConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorReference>,
}

/// Typed `config` of a [`HeaderNavigationItem`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavigationItemConfig {
    Logo(LogoItemConfig),
    Link(LinkItemConfig),
    Button(ButtonItemConfig),
    Dropdown(DropdownConfig),
    Text(TextItemConfig),
}

impl NavigationItemConfig {
    pub fn kind(&self) -> NavigationItemKind {
        match self {
            Self::Logo(_) => NavigationItemKind::Logo,
            Self::Link(_) => NavigationItemKind::Link,
            Self::Button(_) => NavigationItemKind::Button,
            Self::Dropdown(_) => NavigationItemKind::Dropdown,
            Self::Text(_) => NavigationItemKind::Text,
        }
    }

    fn decode(kind: NavigationItemKind, config: Value) -> Result<Self, SchemaError> {
        Ok(match kind {
            NavigationItemKind::Logo => Self::Logo(serde_json::from_value(config)?),
            NavigationItemKind::Link => Self::Link(serde_json::from_value(config)?),
            NavigationItemKind::Button => Self::Button(serde_json::from_value(config)?),
            NavigationItemKind::Dropdown => Self::Dropdown(serde_json::from_value(config)?),
            NavigationItemKind::Text => Self::Text(serde_json::from_value(config)?),
        })
    }
}

/// An entry in a header section.
///
/// `config`, when present, always matches `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNavigationItem")]
pub struct HeaderNavigationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NavigationItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedText>,
    /// Move into the burger menu on small screens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<NavigationItemConfig>,
}

impl HeaderNavigationItem {
    pub fn new(id: impl Into<String>, config: NavigationItemConfig) -> Self {
        Self {
            id: id.into(),
            kind: config.kind(),
            label: None,
            collapse: None,
            config: Some(config),
        }
    }

    pub fn with_label(mut self, label: impl Into<LocalizedText>) -> Self {
        self.label = Some(label.into());
        self
    }

}

#[derive(Deserialize)]
struct RawNavigationItem {
    id: String,
    #[serde(rename = "type")]
    kind: NavigationItemKind,
    #[serde(default)]
    label: Option<LocalizedText>,
    #[serde(default)]
    collapse: Option<bool>,
    #[serde(default)]
    config: Option<Value>,
}

impl TryFrom<RawNavigationItem> for HeaderNavigationItem {
    type Error = SchemaError;

    fn try_from(raw: RawNavigationItem) -> Result<Self, Self::Error> {
        let config = raw
            .config
            .map(|config| NavigationItemConfig::decode(raw.kind, config))
            .transpose()?;
        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            label: raw.label,
            collapse: raw.collapse,
            config,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DropdownContentKind {
    Markdown,
    Image,
    NavigationItem,
    Button,
    Dropdown,
    Section,
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownMarkdownConfig {
    pub content: LocalizedText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    Contain,
    Cover,
    Fill,
    None,
    ScaleDown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownImageConfig {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<ResponsiveValue<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<ResponsiveValue<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_fit: Option<ObjectFit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownLinkConfig {
    pub label: LocalizedText,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownButtonConfig {
    pub label: LocalizedText,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

/// A titled group of dropdown content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownSectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    pub content: Vec<HeaderDropdownContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<FlexJustify>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<FlexAlign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownDividerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<DividerStyle>,
}

/// Typed `config` of a [`HeaderDropdownContent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DropdownContentConfig {
    Markdown(DropdownMarkdownConfig),
    Image(DropdownImageConfig),
    NavigationItem(DropdownLinkConfig),
    Button(DropdownButtonConfig),
    Dropdown(DropdownConfig),
    Section(DropdownSectionConfig),
    Divider(DropdownDividerConfig),
}

impl DropdownContentConfig {
    pub fn kind(&self) -> DropdownContentKind {
        match self {
            Self::Markdown(_) => DropdownContentKind::Markdown,
            Self::Image(_) => DropdownContentKind::Image,
            Self::NavigationItem(_) => DropdownContentKind::NavigationItem,
            Self::Button(_) => DropdownContentKind::Button,
            Self::Dropdown(_) => DropdownContentKind::Dropdown,
            Self::Section(_) => DropdownContentKind::Section,
            Self::Divider(_) => DropdownContentKind::Divider,
        }
    }

    fn decode(kind: DropdownContentKind, config: Value) -> Result<Self, SchemaError> {
        Ok(match kind {
            DropdownContentKind::Markdown => Self::Markdown(serde_json::from_value(config)?),
            DropdownContentKind::Image => Self::Image(serde_json::from_value(config)?),
            DropdownContentKind::NavigationItem => {
                Self::NavigationItem(serde_json::from_value(config)?)
            }
            DropdownContentKind::Button => Self::Button(serde_json::from_value(config)?),
            DropdownContentKind::Dropdown => Self::Dropdown(serde_json::from_value(config)?),
            DropdownContentKind::Section => Self::Section(serde_json::from_value(config)?),
            DropdownContentKind::Divider => Self::Divider(serde_json::from_value(config)?),
        })
    }

    /// Content nested inside a dropdown or section.
    pub fn children(&self) -> &[HeaderDropdownContent] {
        match self {
            Self::Dropdown(c) => &c.content,
            Self::Section(c) => &c.content,
            _ => &[],
        }
    }
}

/// An entry inside a dropdown panel. `config` always matches `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDropdownContent")]
pub struct HeaderDropdownContent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DropdownContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedText>,
    pub config: DropdownContentConfig,
}

impl HeaderDropdownContent {
    pub fn new(id: impl Into<String>, config: DropdownContentConfig) -> Self {
        Self {
            id: id.into(),
            kind: config.kind(),
            label: None,
            config,
        }
    }
}

#[derive(Deserialize)]
struct RawDropdownContent {
    id: String,
    #[serde(rename = "type")]
    kind: DropdownContentKind,
    #[serde(default)]
    label: Option<LocalizedText>,
    config: Value,
}

impl TryFrom<RawDropdownContent> for HeaderDropdownContent {
    type Error = SchemaError;

    fn try_from(raw: RawDropdownContent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            label: raw.label,
            config: DropdownContentConfig::decode(raw.kind, raw.config)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn navigation_item_config_follows_type() {
        let item: HeaderNavigationItem = serde_json::from_value(json!({
            "id": "cta",
            "type": "button",
            "label": { "en": "Sign up", "de": "Anmelden" },
            "config": { "href": "/signup", "variant": "primary", "size": "lg" }
        }))
        .unwrap();
        assert_eq!(item.kind, NavigationItemKind::Button);
        assert_eq!(item.label.as_ref().unwrap().get("de"), Some("Anmelden"));
        let Some(NavigationItemConfig::Button(button)) = &item.config else {
            panic!("expected button config");
        };
        assert_eq!(button.href, "/signup");
        assert_eq!(button.variant, Some(ButtonVariant::Primary));
    }

    #[test]
    fn link_without_href_is_rejected() {
        let result: Result<HeaderNavigationItem, _> = serde_json::from_value(json!({
            "id": "docs",
            "type": "link",
            "config": { "icon": "book" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn null_label_and_missing_config() {
        let item: HeaderNavigationItem = serde_json::from_value(json!({
            "id": "logo",
            "type": "logo",
            "label": null
        }))
        .unwrap();
        assert!(item.label.is_none());
        assert!(item.config.is_none());
    }

    #[test]
    fn nested_dropdown_content() {
        let item: HeaderNavigationItem = serde_json::from_value(json!({
            "id": "products",
            "type": "dropdown",
            "label": "Products",
            "config": {
                "position": "center",
                "content": [
                    { "id": "s1", "type": "section", "config": {
                        "title": "Platform",
                        "justify": "space-between",
                        "content": [
                            { "id": "l1", "type": "navigation-item", "config": { "label": "CMS", "href": "/cms" } },
                            { "id": "d1", "type": "divider", "config": { "style": "dashed" } }
                        ]
                    } },
                    { "id": "img", "type": "image", "config": { "src": "/promo.png", "objectFit": "cover" } }
                ]
            }
        }))
        .unwrap();

        let Some(NavigationItemConfig::Dropdown(dropdown)) = &item.config else {
            panic!("expected dropdown config");
        };
        assert_eq!(dropdown.position, Some(DropdownPosition::Center));
        let section = &dropdown.content[0];
        assert_eq!(section.kind, DropdownContentKind::Section);
        let children = section.config.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].kind, DropdownContentKind::NavigationItem);
        assert_eq!(children[1].config.kind(), DropdownContentKind::Divider);
    }

    #[test]
    fn dropdown_content_requires_config() {
        let result: Result<HeaderDropdownContent, _> =
            serde_json::from_value(json!({ "id": "x", "type": "divider" }));
        assert!(result.is_err());
    }

    #[test]
    fn typed_item_serializes_with_type_and_config() {
        let item = HeaderNavigationItem::new(
            "docs",
            NavigationItemConfig::Link(LinkItemConfig {
                href: "https://docs.example.com".into(),
                icon: None,
                external: Some(true),
            }),
        )
        .with_label("Docs");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "id": "docs",
                "type": "link",
                "label": "Docs",
                "config": { "href": "https://docs.example.com", "external": true }
            })
        );

        let logo = HeaderNavigationItem::new("logo", NavigationItemConfig::Logo(LogoItemConfig {}));
        assert_eq!(serde_json::to_value(&logo).unwrap()["config"], json!({}));
    }

    #[test]
    fn toggle_icon_leaves_unset_fields_empty() {
        let icon: ToggleIconConfig = serde_json::from_value(json!({ "type": "kebab" })).unwrap();
        assert_eq!(icon.icon_type, ToggleIconType::Kebab);
        assert!(icon.animation_duration.is_none());
        assert!(icon.animation_timing.is_none());
        assert_eq!(serde_json::to_value(&icon).unwrap(), json!({ "type": "kebab" }));

        let icon: ToggleIconConfig = serde_json::from_value(json!({
            "type": "plus",
            "animationDuration": 250.5,
            "animationTiming": "ease-in-out",
            "size": 20
        }))
        .unwrap();
        assert_eq!(icon.animation_duration, Some(250.5));
        assert_eq!(icon.animation_timing, Some(ToggleAnimationTiming::EaseInOut));
        assert_eq!(icon.size, Some(20.0));
    }

    #[test]
    fn header_section_order_and_items() {
        let section: HeaderSection = serde_json::from_value(json!({
            "id": "main",
            "order": 0.5,
            "align": "center",
            "justify": "flex-end",
            "flex": "1",
            "items": [
                { "id": "docs", "type": "link", "config": { "href": "/docs" } }
            ]
        }))
        .unwrap();
        assert_eq!(section.order, 0.5);
        assert_eq!(section.items.as_ref().unwrap()[0].kind, NavigationItemKind::Link);
        assert!(section.hide_when_empty.is_none());
    }
}
