//! OTL CMS test utilities.
//!
//! Fixtures and builders for tests against the content model: schema
//! instances, pages, redirects, and custom type definitions, plus
//! assertion helpers for wire-format checks.

use chrono::{TimeZone, Utc};
use otl_cms_types::models::{
    Page, PageLocaleContent, PageVariant, QueryStringBehavior, Redirect, RedirectMatchType,
    RedirectStatusCode, SystemPageRole, Timestamp,
};
use otl_cms_types::registry::{CustomTypeDefinition, SchemaKind};
use otl_cms_types::schema::SchemaInstance;
use serde_json::Value as JsonValue;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// A fixed timestamp (2025-01-01T00:00:00.000Z) for deterministic fixtures.
pub fn fixed_timestamp() -> Timestamp {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        .into()
}

/// A fresh id such as `pg_0190f3a2...`.
pub fn test_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::now_v7().simple())
}

/// Create a schema instance with a generated id and empty config.
pub fn test_instance(schema_type: &str) -> SchemaInstance {
    SchemaInstance::new(test_id("inst"), schema_type)
}

/// Create a custom section definition.
pub fn test_section_type(type_name: &str) -> CustomTypeDefinition {
    CustomTypeDefinition::new(type_name, SchemaKind::Section, type_name)
}

/// Create a custom block definition.
pub fn test_block_type(type_name: &str) -> CustomTypeDefinition {
    CustomTypeDefinition::new(type_name, SchemaKind::Block, type_name)
}

/// Create a test page with an enabled `en` locale at `slug`.
pub fn test_page(title: &str, slug: &str) -> TestPage {
    TestPage {
        id: test_id("pg"),
        deployment_id: "dep_test".to_string(),
        title: title.to_string(),
        locales: vec![locale_content("en", slug)],
        system_role: None,
    }
}

fn locale_content(locale: &str, slug: &str) -> PageLocaleContent {
    PageLocaleContent {
        locale: locale.to_string(),
        title: None,
        slug: slug.to_string(),
        enabled: true,
        inherits_from: None,
        inherited_by: None,
        seo: None,
        variants: vec![PageVariant {
            id: "v1".to_string(),
            label: "Default".to_string(),
            draft_id: None,
            live_id: Some(test_id("doc")),
        }],
        active_version: "v1".to_string(),
        publish_at: None,
        expires_at: None,
        password_protection: None,
        header_preset_id: None,
        footer_preset_id: None,
    }
}

/// A page builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestPage {
    pub id: String,
    pub deployment_id: String,
    pub title: String,
    pub locales: Vec<PageLocaleContent>,
    pub system_role: Option<SystemPageRole>,
}

impl TestPage {
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn with_deployment(mut self, deployment_id: &str) -> Self {
        self.deployment_id = deployment_id.to_string();
        self
    }

    /// Add a locale inheriting from the first one.
    pub fn with_inherited_locale(mut self, locale: &str, slug: &str) -> Self {
        let mut content = locale_content(locale, slug);
        content.inherits_from = self.locales.first().map(|l| l.locale.clone());
        self.locales.push(content);
        self
    }

    /// Disable a locale.
    pub fn disabled(mut self, locale: &str) -> Self {
        for content in self.locales.iter_mut().filter(|l| l.locale == locale) {
            content.enabled = false;
        }
        self
    }

    pub fn system(mut self, role: SystemPageRole) -> Self {
        self.system_role = Some(role);
        self
    }

    pub fn build(self) -> Page {
        Page {
            id: self.id,
            deployment_id: self.deployment_id,
            title: self.title,
            locale_content: self.locales,
            is_system: self.system_role.is_some(),
            system_role: self.system_role,
            created_at: fixed_timestamp(),
            updated_at: fixed_timestamp(),
            deleted_at: None,
        }
    }
}

/// Create an active exact-match 301 redirect.
pub fn test_redirect(from_path: &str, to_path: &str) -> Redirect {
    Redirect {
        id: test_id("rd"),
        deployment_id: "dep_test".to_string(),
        from_path: from_path.to_string(),
        to_path: Some(to_path.to_string()),
        to_url: None,
        status_code: RedirectStatusCode::MovedPermanently,
        match_type: RedirectMatchType::Exact,
        priority: 0.0,
        is_active: true,
        query_string_behavior: QueryStringBehavior::Preserve,
        active_from: None,
        active_until: None,
        headers: None,
        description: None,
        created_by: "user_test".to_string(),
        updated_by: "user_test".to_string(),
        created_at: fixed_timestamp(),
        updated_at: fixed_timestamp(),
        deleted_at: None,
    }
}

/// Standard document envelope fields for config fixtures.
pub fn config_envelope(config_type: &str) -> JsonValue {
    serde_json::json!({
        "version": 1,
        "deployment_id": "dep_test",
        "config_type": config_type,
        "created_at": fixed_timestamp(),
        "updated_at": fixed_timestamp()
    })
}

/// Merge `fields` into `config_envelope(config_type)`.
pub fn config_document(config_type: &str, fields: JsonValue) -> JsonValue {
    let mut document = config_envelope(config_type);
    if let (Some(doc), JsonValue::Object(fields)) = (document.as_object_mut(), fields) {
        doc.extend(fields);
    }
    document
}

/// Assertion helpers for JSON content.
pub mod assert {
    use serde::Serialize;
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a JSON value does not have a key.
    pub fn lacks_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_none(),
            "Expected JSON to omit key '{key}', got: {value}"
        );
    }

    /// Assert that `value` serializes to `expected`.
    pub fn serializes_to<T: Serialize>(value: &T, expected: &Value) {
        let actual = match serde_json::to_value(value) {
            Ok(actual) => actual,
            Err(e) => panic!("value failed to serialize: {e}"),
        };
        assert_eq!(
            &actual,
            expected,
            "JSON mismatch:\nactual: {}\nexpected: {}",
            serde_json::to_string_pretty(&actual).unwrap_or_default(),
            serde_json::to_string_pretty(expected).unwrap_or_default()
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn page_builder() {
        let page = test_page("About", "/about")
            .with_id("pg_about")
            .with_inherited_locale("de", "/ueber-uns")
            .disabled("de")
            .build();
        assert_eq!(page.id, "pg_about");
        assert!(!page.is_system);
        let de = &page.locale_content[1];
        assert_eq!(de.locale, "de");
        assert_eq!(de.inherits_from.as_deref(), Some("en"));
        assert!(!de.enabled);
    }

    #[test]
    fn system_page() {
        let page = test_page("Not found", "/404").system(SystemPageRole::NotFound).build();
        assert!(page.is_system);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(test_id("pg"), test_id("pg"));
        assert!(test_instance("markdown").id.starts_with("inst_"));
    }

    #[test]
    fn config_document_merges_fields() {
        let doc = config_document("colors", serde_json::json!({ "colors": [] }));
        assert::has_key(&doc, "colors");
        assert_eq!(doc["config_type"], "colors");
    }

    #[test]
    fn fixed_timestamp_is_new_year_2025() {
        assert_eq!(fixed_timestamp().as_str(), "2025-01-01T00:00:00.000Z");
        assert_eq!(config_envelope("theme")["created_at"], "2025-01-01T00:00:00.000Z");
    }
}
