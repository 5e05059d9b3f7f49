//! Parsing and writing configuration documents as JSON or YAML.
//!
//! Callers read the bytes themselves; [`DocumentFormat::from_path`] maps a
//! `.json`, `.yml`, or `.yaml` file name to the matching parser.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{SchemaError, SchemaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Format implied by the extension of `path`. Case-sensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> SchemaResult<T> {
        match self {
            Self::Json => from_json_str(content),
            Self::Yaml => from_yaml_str(content),
        }
    }
}

pub fn from_json_str<T: DeserializeOwned>(content: &str) -> SchemaResult<T> {
    Ok(serde_json::from_str(content)?)
}

pub fn from_yaml_str<T: DeserializeOwned>(content: &str) -> SchemaResult<T> {
    Ok(serde_yml::from_str(content)?)
}

pub fn to_yaml_string<T: Serialize>(value: &T) -> SchemaResult<String> {
    Ok(serde_yml::to_string(value)?)
}

pub fn to_json_string_pretty<T: Serialize>(value: &T) -> SchemaResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Error message including every source in the chain.
pub fn describe_error(err: &SchemaError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::schema::SchemaInstance;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("header.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dir/theme.yaml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("theme.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("theme.YML")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("README")), None);
    }

    #[test]
    fn yaml_and_json_agree() {
        let yaml = "id: s1\ntype: hero-banner\nconfig:\n  title: Hello\n";
        let json = r#"{"id":"s1","type":"hero-banner","config":{"title":"Hello"}}"#;
        let from_yaml: SchemaInstance = from_yaml_str(yaml).unwrap();
        let from_json: SchemaInstance = from_json_str(json).unwrap();
        assert_eq!(from_yaml, from_json);

        let written = to_yaml_string(&from_json).unwrap();
        let reread: SchemaInstance = from_yaml_str(&written).unwrap();
        assert_eq!(reread, from_json);
    }

    #[test]
    fn format_picks_the_parser() {
        let format = DocumentFormat::from_path(Path::new("colors.yml")).unwrap();
        let instance: SchemaInstance = format.parse("id: b1\ntype: markdown\n").unwrap();
        assert_eq!(instance.schema_type, "markdown");
        assert!(instance.config.is_empty());

        let err = DocumentFormat::Json
            .parse::<SchemaInstance>("id: b1\n")
            .unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }

    #[test]
    fn parse_errors_keep_their_cause() {
        let err = from_json_str::<SchemaInstance>("{\"id\": 1}").unwrap_err();
        let message = describe_error(&err);
        assert!(message.starts_with("invalid JSON document: "));
        assert!(message.len() > "invalid JSON document: ".len());

        let err = from_yaml_str::<SchemaInstance>("id: [").unwrap_err();
        assert!(matches!(err, SchemaError::Yaml(_)));
        assert!(describe_error(&err).starts_with("invalid YAML document: "));
    }
}
