//! Error types for the fallible parts of the crate.
//!
//! The reserved-type predicates never fail. Errors only arise when parsing a
//! typed identifier, registering a custom type, or decoding a document.

use thiserror::Error;

/// Errors produced while parsing, registering, or decoding schema data.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{value:?} is not a reserved {kind} type")]
    UnknownReservedType { kind: &'static str, value: String },

    #[error("type name must not be empty")]
    EmptyTypeName,

    #[error("type name {0:?} is reserved by the engine")]
    ReservedTypeName(String),

    #[error("type name {0:?} is already registered")]
    DuplicateTypeName(String),

    #[error("unknown config type {0:?}")]
    UnknownConfigType(String),

    #[error("invalid redirect status code {0} (expected 301, 302, 307, or 308)")]
    InvalidRedirectStatus(u16),

    #[error("invalid JSON document")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document")]
    Yaml(#[from] serde_yml::Error),
}

/// Result type alias using SchemaError.
pub type SchemaResult<T> = Result<T, SchemaError>;
