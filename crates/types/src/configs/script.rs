//! Managed third-party scripts and the cookie consent banner.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AutoEventSettings, ConfigType, EventRule};
use crate::models::Timestamp;

/// Consent category gating a script, following IAB TCF conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    Necessary,
    Analytics,
    Marketing,
    Preferences,
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptPlacement {
    Head,
    BodyStart,
    BodyEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScriptLoadingStrategy {
    BeforeInteractive,
    AfterInteractive,
    LazyOnload,
    Worker,
}

/// Kinds of page a script or event rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptContext {
    All,
    Pages,
    BlogListings,
    BlogPosts,
    Forms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomScriptType {
    ScriptTag,
    InlineJs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsProviderType {
    #[serde(rename = "google_analytics_4")]
    GoogleAnalytics4,
    GoogleTagManager,
    Matomo,
    Plausible,
    Fathom,
    Umami,
    Pirsch,
    SimpleAnalytics,
    AdobeAnalytics,
    Mixpanel,
    Amplitude,
    Heap,
    Posthog,
    Segment,
    MicrosoftClarity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketingProviderType {
    MetaPixel,
    GoogleAds,
    LinkedinInsight,
    TiktokPixel,
    PinterestTag,
    TwitterPixel,
    SnapchatPixel,
    RedditPixel,
    BingUet,
    Criteo,
    Outbrain,
    Taboola,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRecordingProviderType {
    Hotjar,
    Fullstory,
    Logrocket,
    Mouseflow,
    LuckyOrange,
    Smartlook,
    CrazyEgg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngagementProviderType {
    Hubspot,
    Intercom,
    Drift,
    Zendesk,
    Crisp,
    TawkTo,
    Livechat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbTestingProviderType {
    Optimizely,
    Vwo,
    AbTasty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentPlatformProviderType {
    Cookiebot,
    Onetrust,
    Usercentrics,
    Iubenda,
}

/// Any known provider. Serialized as the bare provider name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptProviderType {
    Analytics(AnalyticsProviderType),
    Marketing(MarketingProviderType),
    SessionRecording(SessionRecordingProviderType),
    Engagement(EngagementProviderType),
    AbTesting(AbTestingProviderType),
    ConsentPlatform(ConsentPlatformProviderType),
}

/// Attributes of a custom `<script>` tag, or the inline code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomScriptConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#async: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrerpolicy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Fields shared by provider and custom scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedScriptBase {
    pub id: String,
    pub enabled: bool,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub consent_category: ConsentCategory,
    pub loading_strategy: ScriptLoadingStrategy,
    pub placement: ScriptPlacement,
    pub contexts: Vec<ScriptContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_filter: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, String>>,
    /// Lower runs first.
    pub priority: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderManagedScript {
    #[serde(flatten)]
    pub base: ManagedScriptBase,
    pub provider: ScriptProviderType,
    /// Provider settings such as a measurement id.
    pub provider_config: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomManagedScript {
    #[serde(flatten)]
    pub base: ManagedScriptBase,
    pub custom_type: CustomScriptType,
    pub custom_config: CustomScriptConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManagedScript {
    Provider(ProviderManagedScript),
    Custom(CustomManagedScript),
}

impl ManagedScript {
    pub fn base(&self) -> &ManagedScriptBase {
        match self {
            Self::Provider(s) => &s.base,
            Self::Custom(s) => &s.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentCategoryLabel {
    pub title: String,
    pub description: String,
}

/// Consent banner copy for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentBannerTexts {
    pub title: String,
    pub description: String,
    pub accept_all_label: String,
    pub reject_all_label: String,
    pub preferences_label: String,
    pub save_preferences_label: String,
    pub category_labels: BTreeMap<ConsentCategory, ConsentCategoryLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_policy_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_policy_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imprint_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_button_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentBannerPosition {
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentBannerLayout {
    Bar,
    Box,
    Modal,
    Sheet,
}

/// `opt_in` blocks non-necessary scripts until consent; `opt_out` loads them
/// until the visitor objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentMode {
    OptIn,
    OptOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentBannerConfig {
    pub enabled: bool,
    pub position: ConsentBannerPosition,
    pub layout: ConsentBannerLayout,
    pub consent_mode: ConsentMode,
    pub show_reject_all: bool,
    pub show_preferences: bool,
    pub show_close_button: bool,
    pub block_interaction: bool,
    /// Honor `Do Not Track`.
    pub respect_dnt: bool,
    /// Honor Global Privacy Control.
    pub respect_gpc: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_dismiss_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_consent_days: Option<u32>,
    pub cookie_name: String,
    pub cookie_lifetime_days: u32,
    pub google_consent_mode_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_policy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_policy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imprint_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css_class: Option<String>,
    /// Banner copy keyed by locale.
    pub texts: BTreeMap<String, ConsentBannerTexts>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub version: u32,
    pub deployment_id: String,
    pub config_type: ConfigType,
    pub scripts: Vec<ManagedScript>,
    pub consent_banner: ConsentBannerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_events: Option<AutoEventSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_event_rules: Option<Vec<EventRule>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
