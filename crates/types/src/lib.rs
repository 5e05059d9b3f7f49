//! OTL CMS Types
//!
//! Data model shared by the OTL CMS engine and its management API: pages,
//! blogs, forms, leads, redirects, deployment configuration documents, and
//! the section/block schema system.
//!
//! The entry point for custom type authors is the reserved-type check:
//!
//! ```
//! use otl_cms_types::{is_reserved_block_type, is_reserved_schema_type};
//!
//! assert!(is_reserved_schema_type("hero-banner"));
//! assert!(is_reserved_block_type("markdown"));
//! assert!(!is_reserved_schema_type("custom-testimonials"));
//! ```

pub mod api;
pub mod configs;
pub mod error;
pub mod fields;
pub mod loader;
pub mod models;
pub mod props;
pub mod registry;
pub mod responsive;
pub mod schema;

pub use error::{SchemaError, SchemaResult};
pub use schema::{
    ReservedBlockType, ReservedSchemaType, ReservedSectionType, is_reserved_block_type,
    is_reserved_schema_type, is_reserved_section_type,
};

pub mod prelude {
    pub use crate::api::*;
    pub use crate::configs::*;
    pub use crate::error::{SchemaError, SchemaResult};
    pub use crate::fields::*;
    pub use crate::models::*;
    pub use crate::props::*;
    pub use crate::registry::*;
    pub use crate::responsive::*;
    pub use crate::schema::*;
}
