//! Timestamps as stored by the management API.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A timestamp string, kept exactly as received.
///
/// The management API writes RFC 3339, but older records may use other
/// layouts. Nothing is parsed on deserialization, so a record with an odd
/// timestamp still loads and is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse as RFC 3339, keeping the original offset.
    pub fn to_datetime(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.0)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn offset_and_fraction_survive_a_round_trip() {
        let raw = "2025-01-01T10:00:00.000+02:00";
        let ts: Timestamp = serde_json::from_value(json!(raw)).unwrap();
        assert_eq!(ts.as_str(), raw);
        assert_eq!(serde_json::to_value(&ts).unwrap(), json!(raw));

        let parsed = ts.to_datetime().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(
            parsed.with_timezone(&Utc),
            Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn non_rfc3339_strings_are_kept() {
        let ts: Timestamp = serde_json::from_value(json!("2025-01-01 10:00:00+00")).unwrap();
        assert_eq!(ts.to_string(), "2025-01-01 10:00:00+00");
        assert!(ts.to_datetime().is_err());
        assert!(serde_json::from_value::<Timestamp>(json!(1735725600)).is_err());
    }

    #[test]
    fn from_utc_datetime() {
        let ts = Timestamp::from(Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap());
        assert_eq!(ts.as_str(), "2025-06-01T12:30:00.000Z");
        assert_eq!(ts.to_datetime().unwrap().timestamp(), 1_748_781_000);
    }
}
