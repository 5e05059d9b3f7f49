//! API envelope types shared by every endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Standard response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            meta: None,
        }
    }

    /// A failed response carrying `error`.
    pub fn failure(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            meta: None,
        }
    }

    /// Attach pagination metadata.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.meta = Some(ResponseMeta {
            pagination: Some(pagination),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// API error with optional validation details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// `null` on the wire is read as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ApiErrorDetails>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn details(mut self, details: ApiErrorDetails) -> Self {
        self.details = Some(details);
        self
    }
}

/// Error details: a list of field errors, a single one, or free-form data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorDetails {
    List(Vec<ApiErrorDetail>),
    Single(ApiErrorDetail),
    Other(Map<String, Value>),
}

/// A single validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u32,
}

/// Paginated list payload used by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Locale code to text, e.g. `{"en": "Hello", "de": "Hallo"}`.
pub type LocalizedString = BTreeMap<String, String>;

/// Text that is either a single string or localized per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(LocalizedString),
}

impl LocalizedText {
    /// The text for `locale`. Plain text is the same in every locale.
    pub fn get(&self, locale: &str) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Localized(map) => map.get(locale).map(String::as_str),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_response_omits_error() {
        let response = ApiResponse::ok(json!({ "id": "p1" })).with_pagination(Pagination {
            page: 1,
            limit: 20,
            total: 1,
            pages: 1,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            json!({
                "success": true,
                "data": { "id": "p1" },
                "meta": { "pagination": { "page": 1, "limit": 20, "total": 1, "pages": 1 } }
            })
        );
    }

    #[test]
    fn error_details_shapes() {
        let list: ApiError = serde_json::from_value(json!({
            "message": "Validation failed",
            "code": "VALIDATION_ERROR",
            "details": [{ "field": "email", "message": "Invalid email" }]
        }))
        .unwrap();
        assert!(matches!(list.details, Some(ApiErrorDetails::List(ref d)) if d.len() == 1));

        let single: ApiError = serde_json::from_value(json!({
            "message": "Bad slug",
            "details": { "field": "slug", "value": "a b" }
        }))
        .unwrap();
        assert!(matches!(single.details, Some(ApiErrorDetails::Single(_))));

        let other: ApiError = serde_json::from_value(json!({
            "message": "Conflict",
            "details": { "existing_id": "p9" }
        }))
        .unwrap();
        assert!(matches!(other.details, Some(ApiErrorDetails::Other(_))));

        let null: ApiError =
            serde_json::from_value(json!({ "message": "Oops", "details": null })).unwrap();
        assert!(null.details.is_none());
    }

    #[test]
    fn failure_response_round_trips() {
        let response: ApiResponse = ApiResponse::failure(ApiError::new("Not found").code("NOT_FOUND"));
        let json = serde_json::to_string(&response).unwrap();
        let back: ApiResponse = serde_json::from_str(&json).unwrap();
        assert!(!back.success);
        assert_eq!(back.error.unwrap().code.as_deref(), Some("NOT_FOUND"));
    }

    #[test]
    fn localized_text_lookup() {
        let plain: LocalizedText = serde_json::from_value(json!("Hello")).unwrap();
        assert_eq!(plain.get("de"), Some("Hello"));

        let localized: LocalizedText =
            serde_json::from_value(json!({ "en": "Hello", "de": "Hallo" })).unwrap();
        assert_eq!(localized.get("de"), Some("Hallo"));
        assert_eq!(localized.get("fr"), None);
    }

    #[test]
    fn paginated_response_shape() {
        let page: PaginatedResponse<String> = serde_json::from_value(json!({
            "items": ["a", "b"],
            "pagination": { "page": 2, "limit": 2, "total": 6, "pages": 3 }
        }))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.pages, 3);
    }
}
