//! Blogs, posts, authors, categories, and media.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{PasswordProtection, SeoConfig, Timestamp, VersionType};
use crate::fields::InputField;
use crate::schema::{BlockInstance, SchemaInstance, SectionInstance};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogAuthor {
    pub id: String,
    pub blog_id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Blog-wide display, content, and SEO settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogSettings {
    pub display: BlogDisplaySettings,
    pub content: BlogContentSettings,
    pub seo: BlogSeoSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogDisplaySettings {
    pub posts_per_page: u32,
    pub show_author: bool,
    pub show_date: bool,
    pub show_updated_date: bool,
    pub show_categories: bool,
    pub show_tags: bool,
    pub show_excerpt: bool,
    pub show_featured_image: bool,
    pub show_reading_time: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogContentSettings {
    pub excerpt: ExcerptSettings,
    pub featured_image: FeaturedImageSettings,
    /// Words per minute used for reading-time estimates.
    pub reading_time_wpm: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptSettings {
    pub auto_generate: bool,
    pub max_length: u32,
    pub strip_html: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImageSettings {
    pub required: bool,
    /// e.g. `"16:9"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSeoSettings {
    pub title_template: String,
    pub meta_description_template: String,
}

/// Post-level configuration shared by every post in a blog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields_schema: Option<Vec<InputField>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_block_types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_post_blocks: Option<Vec<BlockInstance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_block_structure: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogLocaleConfig {
    pub locale: String,
    pub title: String,
    pub base_path: String,
}

/// Section layouts for each kind of blog page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogLayouts {
    pub post: Vec<SectionInstance>,
    pub index: Vec<SectionInstance>,
    pub category: Vec<SectionInstance>,
    pub author: Vec<SectionInstance>,
    pub tag: Vec<SectionInstance>,
    pub search: Vec<SectionInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogLocaleLayouts {
    pub locale: String,
    pub layouts: BlogLayouts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_by: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: String,
    pub deployment_id: String,
    pub name: String,
    pub locales: Vec<BlogLocaleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub settings: BlogSettings,
    pub posts_config: BlogPostsConfig,
    pub locale_layouts: Vec<BlogLocaleLayouts>,
    pub status: BlogStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

/// Blog category. Localized fields are keyed by locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogCategory {
    pub id: String,
    pub blog_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub title: String,
    pub name: BTreeMap<String, String>,
    pub slug: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<BTreeMap<String, String>>,
    pub sort_order: f64,
    pub depth: u32,
    pub full_path: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<BTreeMap<String, SeoConfig>>,
    pub is_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlogCategory>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

/// Normalized category slug row used for path resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogCategorySlug {
    pub id: String,
    pub deployment_id: String,
    pub blog_id: String,
    pub category_id: String,
    pub locale: String,
    pub slug: String,
    pub full_path: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Category with its full subtree.
///
/// `children` here is always present; the flattened category's own optional
/// `children` is left `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogCategoryTreeNode {
    #[serde(flatten)]
    pub category: BlogCategory,
    pub children: Vec<BlogCategoryTreeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostVariant {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostLocaleContent {
    pub locale: String,
    pub slug: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoConfig>,
    pub variants: Vec<BlogPostVariant>,
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogPostStatus {
    Draft,
    Published,
    Scheduled,
    Expired,
}

/// A post with the content of its current locale, variant, and version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub blog_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    pub author_ids: Vec<String>,
    pub is_featured: bool,
    pub featured_priority: f64,
    pub locale_content: Vec<BlogPostLocaleContent>,

    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<SchemaInstance>>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<MediaReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<Map<String, Value>>,

    pub status: BlogPostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,

    pub reading_time_minutes: u32,

    pub current_locale: String,
    pub current_variant: String,
    pub current_version_type: VersionType,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

/// Inline reference to an image or video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDimensions {
    pub width: u32,
    pub height: u32,
}

/// An uploaded media asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub deployment_id: String,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<MediaDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn category_json(id: &str, children: Value) -> Value {
        json!({
            "id": id,
            "blog_id": "b1",
            "title": id,
            "name": { "en": id },
            "slug": { "en": id },
            "sort_order": 0,
            "depth": 0,
            "full_path": { "en": format!("/{id}") },
            "is_visible": true,
            "children": children,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        })
    }

    #[test]
    fn tree_node_nests_children() {
        let json = category_json("news", json!([category_json("releases", json!([]))]));
        let node: BlogCategoryTreeNode = serde_json::from_value(json).unwrap();
        assert_eq!(node.category.id, "news");
        assert!(node.category.children.is_none());
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].category.id, "releases");
        assert!(node.children[0].children.is_empty());

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["children"][0]["id"], "releases");
    }

    #[test]
    fn post_status_and_version() {
        let post: BlogPost = serde_json::from_value(json!({
            "id": "p1",
            "blog_id": "b1",
            "tags": ["rust"],
            "author_ids": ["a1"],
            "is_featured": false,
            "featured_priority": 0,
            "locale_content": [],
            "title": "Hello",
            "slug": "hello",
            "blocks": [{ "id": "blk1", "type": "markdown", "config": { "content": "# Hi" } }],
            "content": "",
            "featured_image": { "src": "/img/a.png", "alt": "A", "width": 800 },
            "status": "scheduled",
            "scheduled_at": "2025-06-01T08:00:00Z",
            "reading_time_minutes": 3,
            "current_locale": "en",
            "current_variant": "v1",
            "current_version_type": "draft",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(post.status, BlogPostStatus::Scheduled);
        assert_eq!(post.current_version_type, VersionType::Draft);
        assert_eq!(post.featured_image.unwrap().height, None);
        assert!(post.blocks.unwrap()[0].is_reserved());
    }

    #[test]
    fn posts_config_with_custom_fields() {
        let config: BlogPostsConfig = serde_json::from_value(json!({
            "custom_fields_schema": [
                { "type": "text", "id": "subtitle", "label": "Subtitle", "maxLength": 120 }
            ],
            "strict_block_structure": true
        }))
        .unwrap();
        let fields = config.custom_fields_schema.unwrap();
        assert_eq!(fields[0].base().id, "subtitle");
        assert_eq!(config.strict_block_structure, Some(true));
    }
}
