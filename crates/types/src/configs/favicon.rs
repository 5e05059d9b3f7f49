use serde::{Deserialize, Serialize};

use super::ConfigType;
use crate::models::Timestamp;

/// Icons for every platform. All slots are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaviconConfig {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_type: Option<ConfigType>,

    // Standard ICO, PNG, and SVG favicons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_ico: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon16: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon32: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon48: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon96: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon128: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon196: Option<String>,

    // Apple touch icons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_57: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_60: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_72: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_76: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_114: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_120: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_144: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_152: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon_180: Option<String>,

    // Android Chrome icons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_36: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_48: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_72: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_96: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_144: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_192: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_256: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_384: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android_chrome_512: Option<String>,

    // Windows tiles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_application_tile_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_application_tile_70: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_application_tile_150: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_application_tile_310: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms_application_tile_wide: Option<String>,

    // Safari pinned tab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safari_pinned_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safari_pinned_tab_color: Option<String>,

    // Web app manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_start_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_scope: Option<String>,

    // Theme colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}
