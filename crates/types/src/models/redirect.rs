//! URL redirects managed per deployment.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Timestamp;
use crate::error::SchemaError;

/// HTTP status used for a redirect. Serialized as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum RedirectStatusCode {
    MovedPermanently,
    Found,
    TemporaryRedirect,
    PermanentRedirect,
}

impl RedirectStatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            Self::MovedPermanently => 301,
            Self::Found => 302,
            Self::TemporaryRedirect => 307,
            Self::PermanentRedirect => 308,
        }
    }
}

impl TryFrom<u16> for RedirectStatusCode {
    type Error = SchemaError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            301 => Ok(Self::MovedPermanently),
            302 => Ok(Self::Found),
            307 => Ok(Self::TemporaryRedirect),
            308 => Ok(Self::PermanentRedirect),
            other => Err(SchemaError::InvalidRedirectStatus(other)),
        }
    }
}

impl From<RedirectStatusCode> for u16 {
    fn from(code: RedirectStatusCode) -> Self {
        code.as_u16()
    }
}

impl fmt::Display for RedirectStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectMatchType {
    Exact,
    Prefix,
}

/// What happens to the incoming query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStringBehavior {
    Preserve,
    Strip,
    Append,
}

/// A redirect rule. Exactly one of `to_path` / `to_url` is expected to be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub id: String,
    pub deployment_id: String,
    pub from_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_url: Option<String>,
    pub status_code: RedirectStatusCode,
    pub match_type: RedirectMatchType,
    /// Lower is evaluated first.
    pub priority: f64,
    pub is_active: bool,
    pub query_string_behavior: QueryStringBehavior,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_from: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_until: Option<Timestamp>,
    /// Extra response headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}
