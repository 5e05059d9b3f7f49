//! Schema instances and the reserved (engine-provided) schema types.
//!
//! Pages are built from *sections* and posts, form pages and footer areas
//! from *blocks*. Both are stored as a generic [`SchemaInstance`]: an id, a
//! type name, and a free-form config object. A handful of type names are
//! built into the engine and cannot be claimed by custom types:
//!
//! - [`ReservedSectionType`]: 9 section kinds (`hero-banner`, `feature-grid`, ...)
//! - [`ReservedBlockType`]: 13 block kinds (`markdown`, `image`, `code`, ...)
//!
//! Matching is exact and case-sensitive. `"Hero-Banner"` is not reserved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SchemaError;

/// A placed section or block: `{id, type, config}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaInstance {
    pub id: String,

    /// Section or block type name (reserved or custom).
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Type-specific configuration payload.
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl SchemaInstance {
    pub fn new(id: impl Into<String>, schema_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            schema_type: schema_type.into(),
            config: Map::new(),
        }
    }

    /// Set a config entry.
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Whether this instance uses an engine-provided type.
    pub fn is_reserved(&self) -> bool {
        is_reserved_schema_type(&self.schema_type)
    }
}

/// A section placed in a page layout.
pub type SectionInstance = SchemaInstance;

/// A block placed in a post, form page, or footer area.
pub type BlockInstance = SchemaInstance;

/// Pages and contexts a block can be added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockTarget {
    #[serde(rename = "blog.post")]
    BlogPost,
    #[serde(rename = "blog.index")]
    BlogIndex,
    #[serde(rename = "blog.category")]
    BlogCategory,
    #[serde(rename = "blog.author")]
    BlogAuthor,
    #[serde(rename = "blog.tag")]
    BlogTag,
    #[serde(rename = "blog.search")]
    BlogSearch,
    #[serde(rename = "page")]
    Page,
    #[serde(rename = "form")]
    Form,
    #[serde(rename = "footer")]
    Footer,
    /// Any context.
    #[serde(rename = "*")]
    Any,
}

/// Built-in section types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservedSectionType {
    HeroBanner,
    ContentBlocks,
    FeatureGrid,
    TestimonialCarousel,
    CtaBanner,
    TeamGrid,
    FaqAccordion,
    StatsShowcase,
    LogoCloud,
}

impl ReservedSectionType {
    /// Every reserved section type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::HeroBanner,
        Self::ContentBlocks,
        Self::FeatureGrid,
        Self::TestimonialCarousel,
        Self::CtaBanner,
        Self::TeamGrid,
        Self::FaqAccordion,
        Self::StatsShowcase,
        Self::LogoCloud,
    ];

    /// The identifier used in schema instances.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeroBanner => "hero-banner",
            Self::ContentBlocks => "content-blocks",
            Self::FeatureGrid => "feature-grid",
            Self::TestimonialCarousel => "testimonial-carousel",
            Self::CtaBanner => "cta-banner",
            Self::TeamGrid => "team-grid",
            Self::FaqAccordion => "faq-accordion",
            Self::StatsShowcase => "stats-showcase",
            Self::LogoCloud => "logo-cloud",
        }
    }

    /// Look up a reserved section type by exact identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl FromStr for ReservedSectionType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SchemaError::UnknownReservedType {
            kind: "section",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ReservedSectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in block types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservedBlockType {
    Markdown,
    Html,
    Image,
    Quote,
    Gallery,
    Embed,
    Cta,
    Divider,
    Code,
    AboutTheAuthors,
    MoreFromTheAuthors,
    RecommendedPosts,
    RelatedPosts,
}

impl ReservedBlockType {
    /// Every reserved block type, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Markdown,
        Self::Html,
        Self::Image,
        Self::Quote,
        Self::Gallery,
        Self::Embed,
        Self::Cta,
        Self::Divider,
        Self::Code,
        Self::AboutTheAuthors,
        Self::MoreFromTheAuthors,
        Self::RecommendedPosts,
        Self::RelatedPosts,
    ];

    /// The identifier used in schema instances.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Image => "image",
            Self::Quote => "quote",
            Self::Gallery => "gallery",
            Self::Embed => "embed",
            Self::Cta => "cta",
            Self::Divider => "divider",
            Self::Code => "code",
            Self::AboutTheAuthors => "about-the-authors",
            Self::MoreFromTheAuthors => "more-from-the-authors",
            Self::RecommendedPosts => "recommended-posts",
            Self::RelatedPosts => "related-posts",
        }
    }

    /// Look up a reserved block type by exact identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl FromStr for ReservedBlockType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SchemaError::UnknownReservedType {
            kind: "block",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ReservedBlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either a reserved section type or a reserved block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReservedSchemaType {
    Section(ReservedSectionType),
    Block(ReservedBlockType),
}

impl ReservedSchemaType {
    /// Classify a type name. Sections are checked first.
    pub fn classify(name: &str) -> Option<Self> {
        ReservedSectionType::from_name(name)
            .map(Self::Section)
            .or_else(|| ReservedBlockType::from_name(name).map(Self::Block))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Section(t) => t.as_str(),
            Self::Block(t) => t.as_str(),
        }
    }
}

impl FromStr for ReservedSchemaType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::classify(s).ok_or_else(|| SchemaError::UnknownReservedType {
            kind: "schema",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for ReservedSchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `type_name` names a built-in section type.
pub fn is_reserved_section_type(type_name: &str) -> bool {
    ReservedSectionType::from_name(type_name).is_some()
}

/// Whether `type_name` names a built-in block type.
pub fn is_reserved_block_type(type_name: &str) -> bool {
    ReservedBlockType::from_name(type_name).is_some()
}

/// Whether `type_name` names any built-in section or block type.
pub fn is_reserved_schema_type(type_name: &str) -> bool {
    is_reserved_section_type(type_name) || is_reserved_block_type(type_name)
}
