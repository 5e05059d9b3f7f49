//! Forms: definitions, multi-page documents, settings, and submissions.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Timestamp;
use crate::fields::Rule;
use crate::schema::BlockInstance;

/// Everything the engine needs to render an embedded form block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormBlockData {
    pub definition: FormDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<FormDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multivariate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<FormBlockVariant>>,
}

/// A weighted variant for multivariate form tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormBlockVariant {
    pub id: String,
    pub weight: f64,
    pub document: FormDocument,
}

/// Config payload of a form block instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBlockConfig {
    pub form_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub title: String,
    pub deployment_id: String,
    pub settings: FormSettings,
    pub status: FormStatus,
    pub locale_content: Vec<FormLocaleContent>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormLocaleContent {
    pub locale: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherited_by: Option<Vec<String>>,
    pub variants: Vec<FormVariant>,
    pub active_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormVariant {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_id: Option<String>,
}

/// One page of a multi-page form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub blocks: Vec<BlockInstance>,
    /// Skip this page when computing progress (e.g. a thank-you page).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_from_progress: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDocument {
    pub document_id: String,
    pub pages: Vec<FormPage>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

/// Analytics providers to notify: every configured provider, or a list of
/// script ids. Serialized as `"all"` or an array.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetProviders {
    #[default]
    All,
    Only(Vec<String>),
}

impl Serialize for TargetProviders {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.serialize_str("all"),
            Self::Only(ids) => ids.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TargetProviders {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Keyword(String),
            Ids(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Keyword(s) if s == "all" => Ok(Self::All),
            Raw::Keyword(s) => Err(de::Error::custom(format!(
                "invalid target providers {s:?} (expected \"all\" or a list of ids)"
            ))),
            Raw::Ids(ids) => Ok(Self::Only(ids)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnalyticsSettings {
    pub track_form_start: bool,
    pub track_form_submit: bool,
    pub track_form_error: bool,
    pub track_page_navigation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_providers: Option<TargetProviders>,
}

/// Events a rendered form reports to analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormAnalyticsEvent {
    FormStart,
    FormSubmit,
    FormError,
    FormPageChange,
}

/// Payload accompanying a [`FormAnalyticsEvent`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAnalyticsEventData {
    pub form_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fields: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_event_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_providers: Option<TargetProviders>,
}

/// Receiver for form analytics events.
///
/// Implemented for any `Fn(FormAnalyticsEvent, &FormAnalyticsEventData)`.
pub trait FormAnalyticsCallback: Send + Sync {
    fn on_event(&self, event: FormAnalyticsEvent, data: &FormAnalyticsEventData);
}

impl<F> FormAnalyticsCallback for F
where
    F: Fn(FormAnalyticsEvent, &FormAnalyticsEventData) + Send + Sync,
{
    fn on_event(&self, event: FormAnalyticsEvent, data: &FormAnalyticsEventData) {
        self(event, data);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressIndicator {
    Bar,
    Dots,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_indicator: Option<ProgressIndicator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_autosave: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosave_interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_on_blur: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_spam_protection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_messages: Option<FormErrorMessages>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<FormAnalyticsSettings>,
    /// Free-form category such as `"contact"`, `"lead_gen"`, `"newsletter"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_type: Option<String>,
}

/// Overrides for the built-in validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrorMessages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_required: Option<String>,
}

/// Submission of one form page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmissionRequest {
    /// Ties multi-page submissions together; absent on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journey_id: Option<String>,
    pub page_id: String,
    pub data: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmissionResponse {
    pub success: bool,
    pub submission_id: String,
    pub journey_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field id to error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormAdvancedOptions {
    pub rules: Vec<Rule>,
}
