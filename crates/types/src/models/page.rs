//! Pages, their per-locale content, SEO, and password protection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Timestamp;
use crate::schema::SchemaInstance;

/// Schema.org page type for structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaPageType {
    WebPage,
    #[serde(rename = "FAQPage")]
    FaqPage,
    AboutPage,
    ContactPage,
    CollectionPage,
}

/// SEO settings for a page or blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub no_index: bool,
    pub no_follow: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaPageType>,
    /// Replaces the generated JSON-LD when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data_override: Option<Map<String, Value>>,
}

/// A content variant with its draft and live document ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageVariant {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_id: Option<String>,
}

/// Password metadata. The secret itself never leaves the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub id: String,
    pub label: String,
    pub created: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordProtection {
    pub enabled: bool,
    pub password_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passwords: Option<Vec<PasswordEntry>>,
}

/// Locale-specific page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLocaleContent {
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slug: String,
    pub enabled: bool,
    /// Locale this one inherits its content from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoConfig>,
    pub variants: Vec<PageVariant>,
    /// Id of the variant currently served.
    pub active_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_protection: Option<PasswordProtection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_preset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_preset_id: Option<String>,
}

/// Role of a system page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SystemPageRole {
    Home,
    NotFound,
    Error,
    Forbidden,
    Unauthorized,
}

/// Page metadata with per-locale content settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub deployment_id: String,
    pub title: String,
    pub locale_content: Vec<PageLocaleContent>,
    pub is_system: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_role: Option<SystemPageRole>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

/// The section list for one page version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDocument {
    pub document_id: String,
    pub sections: Vec<SchemaInstance>,
    pub updated_by: String,
    pub updated_at: Timestamp,
    pub created_by: String,
    pub created_at: Timestamp,
}

/// Which copy of a variant is being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    Draft,
    Live,
}

/// Page metadata together with the document being rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageWithContent {
    pub page: Page,
    pub document: PageDocument,
    pub current_locale: String,
    pub current_variant_id: String,
    pub current_version_type: VersionType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Live,
    Scheduled,
    Expired,
    Draft,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_json() -> Value {
        json!({
            "id": "pg_1",
            "deployment_id": "dep_1",
            "title": "Home",
            "is_system": true,
            "system_role": "home",
            "locale_content": [
                {
                    "locale": "en",
                    "slug": "/",
                    "enabled": true,
                    "variants": [{ "id": "v1", "label": "Default", "live_id": "doc_1" }],
                    "active_version": "v1",
                    "seo": { "title": "Welcome", "no_index": false, "no_follow": false, "schema_type": "FAQPage" }
                },
                {
                    "locale": "de",
                    "slug": "/",
                    "enabled": true,
                    "inherits_from": "en",
                    "variants": [],
                    "active_version": "v1",
                    "publish_at": "2025-03-01T09:00:00.000Z"
                }
            ],
            "created_at": "2025-01-10T12:00:00.000Z",
            "updated_at": "2025-02-01T08:30:00Z"
        })
    }

    #[test]
    fn page_with_locales() {
        let page: Page = serde_json::from_value(page_json()).unwrap();
        assert_eq!(page.system_role, Some(SystemPageRole::Home));

        let en = &page.locale_content[0];
        assert_eq!(en.locale, "en");
        assert_eq!(en.variants[0].live_id.as_deref(), Some("doc_1"));
        assert_eq!(
            en.seo.as_ref().unwrap().schema_type,
            Some(SchemaPageType::FaqPage)
        );

        let de = &page.locale_content[1];
        assert_eq!(de.inherits_from.as_deref(), Some("en"));
        assert_eq!(
            de.publish_at.as_ref().map(Timestamp::as_str),
            Some("2025-03-01T09:00:00.000Z")
        );
        assert_eq!(page.created_at.as_str(), "2025-01-10T12:00:00.000Z");
    }

    #[test]
    fn not_found_role_is_kebab_case() {
        assert_eq!(
            serde_json::to_value(SystemPageRole::NotFound).unwrap(),
            json!("not-found")
        );
    }

    #[test]
    fn seo_requires_robot_flags() {
        let result: Result<SeoConfig, _> = serde_json::from_value(json!({ "title": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn page_document_holds_sections() {
        let doc: PageDocument = serde_json::from_value(json!({
            "document_id": "doc_1",
            "sections": [
                { "id": "s1", "type": "hero-banner", "config": { "title": "Hi" } },
                { "id": "s2", "type": "acme-pricing", "config": {} }
            ],
            "updated_by": "u1",
            "updated_at": "2025-01-10T12:00:00Z",
            "created_by": "u1",
            "created_at": "2025-01-10T12:00:00Z"
        }))
        .unwrap();
        assert!(doc.sections[0].is_reserved());
        assert!(!doc.sections[1].is_reserved());
    }
}
