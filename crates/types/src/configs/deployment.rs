//! The full configuration bundle of a deployment.

use serde::{Deserialize, Serialize};

use super::{
    ColorConfig, FaviconConfig, FontConfig, FooterConfig, HeaderConfig, PresetMeta,
    ScriptConfig, ThemeConfig, WebsiteConfig,
};
use crate::models::Deployment;

/// Every configuration document of one deployment. Each slot is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<WebsiteConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<ScriptConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<FaviconConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_presets_meta: Option<Vec<PresetMeta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_presets_meta: Option<Vec<PresetMeta>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_bundle() {
        let config: DeploymentConfig = serde_json::from_value(json!({
            "favicon": { "version": 1, "favicon_ico": "/favicon.ico" },
            "header_presets_meta": [
                { "id": "minimal", "label": "Minimal", "is_default": true }
            ]
        }))
        .unwrap();
        assert_eq!(
            config.favicon.as_ref().unwrap().favicon_ico.as_deref(),
            Some("/favicon.ico")
        );
        assert_eq!(config.header_presets_meta.as_ref().unwrap()[0].id, "minimal");
        assert!(config.website.is_none() && config.footer_presets_meta.is_none());

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back.as_object().unwrap().len(), 2);
    }

    #[test]
    fn empty_bundle_round_trips() {
        let json = serde_json::to_value(DeploymentConfig::default()).unwrap();
        assert_eq!(json, json!({}));
        let back: DeploymentConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, DeploymentConfig::default());
    }
}
