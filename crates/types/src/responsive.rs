//! Responsive values, colors, borders, shadows, and spacing.
//!
//! These are shared by section configs, header/footer styles, and theme
//! slots.

use serde::{Deserialize, Serialize};

/// Breakpoints including the mobile-first `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BreakpointWithBase {
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

/// Tailwind breakpoints (no `base`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

/// Per-breakpoint values. `base` is required, the rest are overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveConfig<T> {
    pub base: T,
    // No `default` here: it would make the derive require `T: Default`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lg: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xl: Option<T>,
    #[serde(rename = "2xl", skip_serializing_if = "Option::is_none")]
    pub xxl: Option<T>,
}

impl<T> ResponsiveConfig<T> {
    pub fn new(base: T) -> Self {
        Self {
            base,
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }

    /// The value set for exactly this breakpoint, if any.
    pub fn get(&self, breakpoint: BreakpointWithBase) -> Option<&T> {
        match breakpoint {
            BreakpointWithBase::Base => Some(&self.base),
            BreakpointWithBase::Sm => self.sm.as_ref(),
            BreakpointWithBase::Md => self.md.as_ref(),
            BreakpointWithBase::Lg => self.lg.as_ref(),
            BreakpointWithBase::Xl => self.xl.as_ref(),
            BreakpointWithBase::Xxl => self.xxl.as_ref(),
        }
    }
}

/// A single value or a per-breakpoint config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    // Tried first: a single value that happens to be an object must not
    // carry a `base` key.
    Responsive(ResponsiveConfig<T>),
    Single(T),
}

impl<T> ResponsiveValue<T> {
    /// The base (or only) value.
    pub fn base(&self) -> &T {
        match self {
            Self::Single(v) => v,
            Self::Responsive(config) => &config.base,
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        Self::Single(value)
    }
}

/// Paired background/foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColor {
    pub background: String,
    pub foreground: String,
}

/// Which half of a color pair a reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTarget {
    Background,
    Foreground,
}

/// Value of a custom color reference: a raw CSS color or a pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomColorValue {
    Css(String),
    Pair(CustomColor),
}

/// A color reference: a theme slot, a CSS variable, or a custom value.
///
/// Without a `target`, theme and variable references mean the whole
/// background/foreground pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorReference {
    Theme {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<ColorTarget>,
    },
    Variable {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<ColorTarget>,
    },
    Custom {
        value: CustomColorValue,
    },
}

impl ColorReference {
    /// Reference a theme slot as a pair.
    pub fn theme(slot: impl Into<String>) -> Self {
        Self::Theme {
            value: slot.into(),
            target: None,
        }
    }

    /// A raw CSS color.
    pub fn custom(css: impl Into<String>) -> Self {
        Self::Custom {
            value: CustomColorValue::Css(css.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

/// Per-side border override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorReference>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderConfig {
    pub width: String,
    pub style: BorderStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderSide>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderSide>,
}

/// CSS `box-shadow` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    pub offset_x: String,
    pub offset_y: String,
    pub blur_radius: String,
    pub spread_radius: String,
    /// Any CSS color (`rgba(...)`, `#000`, `hsl(...)`).
    pub color: String,
    pub inset: bool,
}

/// Padding or margin. `value` applies to sides left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
}

pub type PaddingConfig = SpacingConfig;
pub type MarginConfig = SpacingConfig;

/// How a section or header/footer relates to the page container.
///
/// - `boxed`: boxed in the container
/// - `edged`: full width, contents aligned to the container edges
/// - `ignore`: full width, no container constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerBehavior {
    Boxed,
    Edged,
    Ignore,
}
