//! Leads captured from forms and their notes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub organization_id: String,
    pub deployment_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub form_type: String,
    pub source: String,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_data: Option<UtmData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<LeadNote>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Campaign attribution parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadNote {
    pub id: String,
    pub content: String,
    pub created_by: String,
    pub created_at: Timestamp,
}

/// Public lead capture payload. UTM parameters arrive flat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadCaptureRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub form_type: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn capture(extra: Value) -> LeadCaptureRequest {
        let mut base = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "form_type": "contact",
            "source": "website"
        });
        if let (Some(base), Some(extra)) = (base.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn utm_fields_arrive_flat() {
        let request = capture(json!({ "utm_source": "newsletter", "utm_campaign": "spring" }));
        assert_eq!(request.utm_source.as_deref(), Some("newsletter"));
        assert_eq!(request.utm_campaign.as_deref(), Some("spring"));
        assert!(request.utm_medium.is_none());

        let back = serde_json::to_value(&request).unwrap();
        assert_eq!(back["utm_source"], "newsletter");
        assert!(back.get("utm_data").is_none());
    }

    #[test]
    fn lead_status_values() {
        let statuses: Vec<LeadStatus> =
            serde_json::from_value(json!(["new", "qualified", "lost"])).unwrap();
        assert_eq!(
            statuses,
            vec![LeadStatus::New, LeadStatus::Qualified, LeadStatus::Lost]
        );
    }
}
