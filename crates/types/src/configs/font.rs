//! Fonts and typography assignments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigType;
use crate::models::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    pub version: u32,
    pub deployment_id: String,
    pub config_type: ConfigType,
    pub fonts: Vec<Font>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSource {
    Google,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub id: String,
    pub name: String,
    /// CSS `font-family` value.
    pub family: String,
    pub source: FontSource,
    /// Weights and styles, e.g. `["400", "700", "400italic"]`.
    pub variants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsets: Option<Vec<String>>,
    /// Variant to file URL, for custom fonts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, String>>,
}

/// Override applied to inline text modifiers (`strong`, `em`, `code`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontAssignment {
    pub font_id: String,
    pub font_weight: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    pub font_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<FontOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<FontOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_code: Option<FontOverride>,
}

/// Font assignments per text element. Unset elements use the engine default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h1: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h2: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h3: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h4: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h5: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h6: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockquote: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<FontAssignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<FontAssignment>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn typography_with_inline_overrides() {
        let typography: TypographySettings = serde_json::from_value(json!({
            "h1": { "fontId": "playfair", "fontWeight": "700", "fontSize": "3rem" },
            "paragraph": {
                "fontId": "inter",
                "fontWeight": "400",
                "fontSize": "1rem",
                "lineHeight": "1.6",
                "inlineCode": { "fontId": "jetbrains-mono", "fontSize": "0.9em" }
            }
        }))
        .unwrap();
        let paragraph = typography.paragraph.as_ref().unwrap();
        assert_eq!(paragraph.line_height.as_deref(), Some("1.6"));
        let code = paragraph.inline_code.as_ref().unwrap();
        assert_eq!(code.font_id.as_deref(), Some("jetbrains-mono"));
        assert!(code.font_weight.is_none());
        assert!(typography.h2.is_none());

        let back = serde_json::to_value(&typography).unwrap();
        assert_eq!(back["paragraph"]["inlineCode"]["fontSize"], "0.9em");
        assert!(back.get("h2").is_none());
    }

    #[test]
    fn custom_font_files() {
        let font: Font = serde_json::from_value(json!({
            "id": "brand",
            "name": "Brand Sans",
            "family": "'Brand Sans', sans-serif",
            "source": "custom",
            "variants": ["400", "700"],
            "files": { "400": "/fonts/brand-400.woff2" }
        }))
        .unwrap();
        assert_eq!(font.source, FontSource::Custom);
        assert!(font.subsets.is_none());
        assert_eq!(font.files.unwrap().len(), 1);
    }
}
