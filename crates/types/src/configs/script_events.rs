//! Analytics events: standard names, automatic tracking, and event rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ScriptContext;
use crate::models::{TargetProviders, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationEventName {
    PageView,
    ScrollDepth,
    OutboundClick,
    InternalLinkClick,
    FileDownload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementEventName {
    FormStart,
    FormSubmit,
    FormError,
    Search,
    VideoStart,
    VideoProgress,
    VideoComplete,
    Share,
    ContentView,
    ElementVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionEventName {
    GenerateLead,
    SignUp,
    Login,
    Purchase,
    AddToCart,
    BeginCheckout,
    Contact,
    Schedule,
    Subscribe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEventName {
    BlockClick,
    BlockVisible,
    ExperimentView,
    /// Named by the rule's `custom_event_name`.
    Custom,
}

/// Any standard event. Serialized as the bare event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StandardEventName {
    Navigation(NavigationEventName),
    Engagement(EngagementEventName),
    Conversion(ConversionEventName),
    Special(SpecialEventName),
}

impl StandardEventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navigation(name) => match name {
                NavigationEventName::PageView => "page_view",
                NavigationEventName::ScrollDepth => "scroll_depth",
                NavigationEventName::OutboundClick => "outbound_click",
                NavigationEventName::InternalLinkClick => "internal_link_click",
                NavigationEventName::FileDownload => "file_download",
            },
            Self::Engagement(name) => match name {
                EngagementEventName::FormStart => "form_start",
                EngagementEventName::FormSubmit => "form_submit",
                EngagementEventName::FormError => "form_error",
                EngagementEventName::Search => "search",
                EngagementEventName::VideoStart => "video_start",
                EngagementEventName::VideoProgress => "video_progress",
                EngagementEventName::VideoComplete => "video_complete",
                EngagementEventName::Share => "share",
                EngagementEventName::ContentView => "content_view",
                EngagementEventName::ElementVisible => "element_visible",
            },
            Self::Conversion(name) => match name {
                ConversionEventName::GenerateLead => "generate_lead",
                ConversionEventName::SignUp => "sign_up",
                ConversionEventName::Login => "login",
                ConversionEventName::Purchase => "purchase",
                ConversionEventName::AddToCart => "add_to_cart",
                ConversionEventName::BeginCheckout => "begin_checkout",
                ConversionEventName::Contact => "contact",
                ConversionEventName::Schedule => "schedule",
                ConversionEventName::Subscribe => "subscribe",
            },
            Self::Special(name) => match name {
                SpecialEventName::BlockClick => "block_click",
                SpecialEventName::BlockVisible => "block_visible",
                SpecialEventName::ExperimentView => "experiment_view",
                SpecialEventName::Custom => "custom",
            },
        }
    }
}

impl std::fmt::Display for StandardEventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events tracked without explicit rules. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoEventSettings {
    pub page_views: bool,
    pub outbound_links: bool,
    pub file_downloads: bool,
    /// Extensions counted as downloads, e.g. `["pdf", "zip"]`.
    pub file_extensions: Vec<String>,
    pub scroll_depth: bool,
    /// Scroll percentages, e.g. `[25, 50, 75, 100]`.
    pub scroll_thresholds: Vec<f64>,
    pub form_submissions: bool,
    pub time_on_page: bool,
    /// Seconds, e.g. `[30, 60, 180]`.
    pub time_thresholds: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTrackType {
    Click,
    Visibility,
    Both,
}

/// Per-block analytics stored in a block's config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockAnalyticsConfig {
    pub enabled: bool,
    /// e.g. `"hero_cta_click"`.
    pub event_label: String,
    pub track_type: BlockTrackType,
    /// Percent of the block that must be visible (0-100). Unset means 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_threshold: Option<f64>,
    /// Unset means `true` for visibility tracking. Clicks have no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_once: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_providers: Option<TargetProviders>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_params: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTriggerType {
    PageLoad,
    Click,
    ScrollDepth,
    ElementVisibility,
    TimeOnPage,
    FormSubmission,
    OutboundLink,
    FileDownload,
    CustomJs,
    DataLayerPush,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventTriggerConfig {
    PageLoad,
    Click {
        css_selector: String,
    },
    ScrollDepth {
        thresholds: Vec<f64>,
    },
    ElementVisibility {
        css_selector: String,
        threshold: f64,
    },
    TimeOnPage {
        seconds: f64,
    },
    FormSubmission {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        form_id: Option<String>,
    },
    OutboundLink,
    FileDownload {
        extensions: Vec<String>,
    },
    CustomJs {
        /// JavaScript expression evaluated in the page.
        condition: String,
    },
    DataLayerPush {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

impl EventTriggerConfig {
    pub fn trigger_type(&self) -> EventTriggerType {
        match self {
            Self::PageLoad => EventTriggerType::PageLoad,
            Self::Click { .. } => EventTriggerType::Click,
            Self::ScrollDepth { .. } => EventTriggerType::ScrollDepth,
            Self::ElementVisibility { .. } => EventTriggerType::ElementVisibility,
            Self::TimeOnPage { .. } => EventTriggerType::TimeOnPage,
            Self::FormSubmission { .. } => EventTriggerType::FormSubmission,
            Self::OutboundLink => EventTriggerType::OutboundLink,
            Self::FileDownload { .. } => EventTriggerType::FileDownload,
            Self::CustomJs { .. } => EventTriggerType::CustomJs,
            Self::DataLayerPush { .. } => EventTriggerType::DataLayerPush,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMatchType {
    Exact,
    Contains,
    Regex,
    StartsWith,
}

/// Restricts a trigger to matching page paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPageFilter {
    pub match_type: PageMatchType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTrigger {
    /// Repeats `config`'s own `type`.
    #[serde(rename = "type")]
    pub trigger_type: EventTriggerType,
    pub config: EventTriggerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_filter: Option<EventPageFilter>,
}

impl EventTrigger {
    pub fn new(config: EventTriggerConfig) -> Self {
        Self {
            trigger_type: config.trigger_type(),
            config,
            page_filter: None,
        }
    }

}

/// Per-provider renaming of an event and its parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEventOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_overrides: Option<BTreeMap<String, String>>,
}

/// A user-defined tracking rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRule {
    pub id: String,
    pub enabled: bool,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub trigger: EventTrigger,
    pub event_name: StandardEventName,
    /// Only meaningful when `event_name` is `custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_params: Option<BTreeMap<String, String>>,
    pub target_providers: TargetProviders,
    /// Keyed by script id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_overrides: Option<BTreeMap<String, ProviderEventOverride>>,
    pub contexts: Vec<ScriptContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_filter: Option<Vec<String>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn auto_events() -> serde_json::Value {
        json!({
            "page_views": true,
            "outbound_links": true,
            "file_downloads": true,
            "file_extensions": ["pdf", "zip"],
            "scroll_depth": true,
            "scroll_thresholds": [33.3, 66.6, 100],
            "form_submissions": false,
            "time_on_page": true,
            "time_thresholds": [15, 90.5]
        })
    }

    #[test]
    fn auto_event_settings_keep_fractional_thresholds() {
        let settings: AutoEventSettings = serde_json::from_value(auto_events()).unwrap();
        assert_eq!(settings.scroll_thresholds, vec![33.3, 66.6, 100.0]);
        assert_eq!(settings.time_thresholds, vec![15.0, 90.5]);
        assert_eq!(settings.file_extensions, ["pdf", "zip"]);

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["scroll_thresholds"][0], json!(33.3));
    }

    #[test]
    fn auto_event_settings_require_every_field() {
        assert!(serde_json::from_value::<AutoEventSettings>(json!({})).is_err());

        let mut missing = auto_events();
        missing.as_object_mut().unwrap().remove("file_extensions");
        assert!(serde_json::from_value::<AutoEventSettings>(missing).is_err());
    }

    #[test]
    fn rule_with_provider_overrides() {
        let rule: EventRule = serde_json::from_value(json!({
            "id": "r1",
            "enabled": true,
            "label": "Pricing CTA",
            "trigger": {
                "type": "click",
                "config": { "type": "click", "css_selector": ".pricing .cta" },
                "page_filter": { "match_type": "starts_with", "value": "/pricing" }
            },
            "event_name": "custom",
            "custom_event_name": "pricing_cta",
            "target_providers": ["ga", "meta"],
            "provider_overrides": { "meta": { "event_name_override": "Lead" } },
            "contexts": ["pages", "blog_posts"],
            "locale_filter": ["en"],
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            rule.event_name,
            StandardEventName::Special(SpecialEventName::Custom)
        );
        assert_eq!(rule.custom_event_name.as_deref(), Some("pricing_cta"));
        assert_eq!(
            rule.target_providers,
            TargetProviders::Only(vec!["ga".into(), "meta".into()])
        );
        let overrides = rule.provider_overrides.as_ref().unwrap();
        assert_eq!(overrides["meta"].event_name_override.as_deref(), Some("Lead"));
        assert_eq!(rule.contexts, [ScriptContext::Pages, ScriptContext::BlogPosts]);
        assert_eq!(
            rule.trigger.page_filter.as_ref().unwrap().match_type,
            PageMatchType::StartsWith
        );

        let back = serde_json::to_value(&rule).unwrap();
        assert_eq!(back["event_name"], "custom");
        assert_eq!(back["trigger"]["type"], "click");
    }

    #[test]
    fn event_name_families_serialize_flat() {
        for name in ["page_view", "video_complete", "subscribe", "experiment_view"] {
            let parsed: StandardEventName = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(parsed.as_str(), name);
            assert_eq!(serde_json::to_value(parsed).unwrap(), json!(name));
        }
    }

    #[test]
    fn trigger_configs() {
        let triggers: Vec<EventTriggerConfig> = serde_json::from_value(json!([
            { "type": "page_load" },
            { "type": "time_on_page", "seconds": 45.5 },
            { "type": "scroll_depth", "thresholds": [12.5, 50] },
            { "type": "data_layer_push", "key": "event", "value": "signup" }
        ]))
        .unwrap();
        assert_eq!(triggers[0], EventTriggerConfig::PageLoad);
        assert_eq!(triggers[1], EventTriggerConfig::TimeOnPage { seconds: 45.5 });
        assert_eq!(triggers[2].trigger_type(), EventTriggerType::ScrollDepth);

        let trigger = EventTrigger::new(EventTriggerConfig::OutboundLink);
        assert_eq!(trigger.trigger_type, EventTriggerType::OutboundLink);
        assert_eq!(
            serde_json::to_value(&trigger).unwrap(),
            json!({ "type": "outbound_link", "config": { "type": "outbound_link" } })
        );
    }

    #[test]
    fn block_analytics_leaves_optional_fields_unset() {
        let config: BlockAnalyticsConfig = serde_json::from_value(json!({
            "enabled": true,
            "event_label": "hero_cta_click",
            "track_type": "click",
            "target_providers": "all"
        }))
        .unwrap();
        assert_eq!(config.track_type, BlockTrackType::Click);
        assert!(config.visibility_threshold.is_none());
        assert!(config.fire_once.is_none());
        assert_eq!(config.target_providers, Some(TargetProviders::All));

        let visible: BlockAnalyticsConfig = serde_json::from_value(json!({
            "enabled": true,
            "event_label": "pricing_seen",
            "track_type": "visibility",
            "visibility_threshold": 62.5,
            "fire_once": false
        }))
        .unwrap();
        assert_eq!(visible.visibility_threshold, Some(62.5));
        assert_eq!(visible.fire_once, Some(false));
    }
}
