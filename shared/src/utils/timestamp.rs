//! Timestamp normalization at the document store boundary
//!
//! Stored documents may carry timestamps as RFC 3339 strings, epoch
//! milliseconds, or `{seconds, nanoseconds}` objects (also accepted with a
//! leading underscore). Everything is read into `DateTime<Utc>` and always
//! written back as RFC 3339.
//!
//! Use with `#[serde(with = "gc_shared::utils::timestamp")]`, or the
//! [`option`] sub-module for nullable fields.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    Fractional(f64),
    Seconds {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
}

impl RawTimestamp {
    fn into_datetime(self) -> Result<DateTime<Utc>, String> {
        match self {
            RawTimestamp::Text(text) => parse_rfc3339(&text),
            RawTimestamp::Millis(millis) => Utc
                .timestamp_millis_opt(millis)
                .single()
                .ok_or_else(|| format!("epoch milliseconds out of range: {}", millis)),
            RawTimestamp::Fractional(millis) => Utc
                .timestamp_millis_opt(millis.round() as i64)
                .single()
                .ok_or_else(|| format!("epoch milliseconds out of range: {}", millis)),
            RawTimestamp::Seconds { seconds, nanoseconds } => Utc
                .timestamp_opt(seconds, nanoseconds)
                .single()
                .ok_or_else(|| format!("epoch seconds out of range: {}", seconds)),
        }
    }
}

/// Parse an RFC 3339 string into UTC
pub fn parse_rfc3339(text: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp '{}': {}", text, e))
}

/// Canonical string form written to the store
pub fn to_rfc3339(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Day/month/year rendering used in French copy
pub fn format_fr_date(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y").to_string()
}

pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_rfc3339(dt))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    RawTimestamp::deserialize(deserializer)?
        .into_datetime()
        .map_err(de::Error::custom)
}

/// Nullable variant of the parent module
pub mod option {
    use super::RawTimestamp;
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawTimestamp>::deserialize(deserializer)?
            .map(|raw| raw.into_datetime().map_err(de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct Doc {
        #[serde(with = "super")]
        at: DateTime<Utc>,
        #[serde(default, with = "super::option")]
        maybe: Option<DateTime<Utc>>,
    }

    fn expected() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_accepts_rfc3339_with_offset() {
        let doc: Doc = serde_json::from_value(json!({"at": "2024-03-01T13:30:00+01:00"})).unwrap();
        assert_eq!(doc.at, expected());
        assert!(doc.maybe.is_none());
    }

    #[test]
    fn test_accepts_epoch_millis() {
        let millis = expected().timestamp_millis();
        let doc: Doc = serde_json::from_value(json!({"at": millis, "maybe": null})).unwrap();
        assert_eq!(doc.at, expected());
        assert!(doc.maybe.is_none());
    }

    #[test]
    fn test_accepts_seconds_objects() {
        let secs = expected().timestamp();
        let doc: Doc = serde_json::from_value(json!({
            "at": {"seconds": secs, "nanoseconds": 0},
            "maybe": {"_seconds": secs, "_nanoseconds": 0}
        }))
        .unwrap();
        assert_eq!(doc.at, expected());
        assert_eq!(doc.maybe, Some(expected()));
    }

    #[test]
    fn test_writes_rfc3339() {
        let doc = Doc { at: expected(), maybe: None };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["at"], "2024-03-01T12:30:00.000Z");
        assert!(value["maybe"].is_null());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_value::<Doc>(json!({"at": "yesterday"})).is_err());
        assert!(serde_json::from_value::<Doc>(json!({"at": true})).is_err());
    }

    #[test]
    fn test_format_fr_date() {
        assert_eq!(format_fr_date(&expected()), "01/03/2024");
    }
}
