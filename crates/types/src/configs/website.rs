//! Site-wide settings, organization data, and crawler files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ConfigType;
use crate::api::LocalizedText;
use crate::models::{PasswordProtection, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteConfig {
    pub version: u32,
    pub deployment_id: String,
    pub config_type: ConfigType,
    pub site_name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<LocalizedText>,
    /// IANA time zone, e.g. `"Europe/Berlin"`.
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_protection: Option<PasswordProtection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_prompt_texts: Option<PasswordPromptTexts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    /// Appended to the generated `robots.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots_txt_custom_rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ads_txt_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_txt: Option<SecurityTxtConfig>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Organization data for JSON-LD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_profiles: Option<Vec<SocialProfile>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub platform: String,
    pub url: String,
}

/// Fields of an RFC 9116 `security.txt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityTxtConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hiring_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledgments_url: Option<String>,
}

/// Text of the password prompt. Unset entries use the renderer's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPromptTexts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incorrect_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifying_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_label: Option<String>,
}
