//! Light/dark theme slots and typography.

use serde::{Deserialize, Serialize};

use super::{ConfigType, TypographySettings};
use crate::models::Timestamp;
use crate::responsive::ColorReference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub version: u32,
    pub deployment_id: String,
    pub config_type: ConfigType,
    pub light: ThemeSlots,
    pub dark: ThemeSlots,
    pub typography: TypographySettings,
    /// Base border radius, e.g. `"0.5rem"`.
    pub radius: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Background and foreground for one color mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColorMode {
    pub background: String,
    pub foreground: String,
}

/// A palette color with light and dark variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub id: String,
    pub name: String,
    pub light: ThemeColorMode,
    pub dark: ThemeColorMode,
}

/// Theme slot assignments. Each slot references a background/foreground pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSlots {
    pub surface: ColorReference,
    pub primary: ColorReference,
    pub secondary: ColorReference,
    pub accent: ColorReference,
    pub muted: ColorReference,
    pub border: ColorReference,
    pub card: ColorReference,
    pub destructive: ColorReference,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    const SLOTS: [&str; 8] = [
        "surface",
        "primary",
        "secondary",
        "accent",
        "muted",
        "border",
        "card",
        "destructive",
    ];

    fn slots(primary: &str) -> serde_json::Value {
        let mut slots = serde_json::Map::new();
        for name in SLOTS {
            let value = if name == "primary" { primary } else { name };
            slots.insert(name.into(), json!({ "type": "theme", "value": value }));
        }
        serde_json::Value::Object(slots)
    }

    #[test]
    fn theme_slots_per_mode() {
        let theme: ThemeConfig = serde_json::from_value(json!({
            "version": 1,
            "deployment_id": "dep_1",
            "config_type": "theme",
            "light": slots("brand"),
            "dark": slots("brand-dark"),
            "typography": {
                "h1": { "fontId": "inter", "fontWeight": "700", "fontSize": "2.5rem" }
            },
            "radius": "0.5rem",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(theme.dark.primary, ColorReference::theme("brand-dark"));
        assert_eq!(theme.light.primary, ColorReference::theme("brand"));
        assert_eq!(theme.typography.h1.unwrap().font_id, "inter");
    }

    #[test]
    fn theme_requires_every_slot() {
        let mut light = slots("brand");
        light.as_object_mut().unwrap().remove("destructive");
        let result: Result<ThemeSlots, _> = serde_json::from_value(light);
        assert!(result.is_err());
    }
}
