use crate::types::ValidationError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp format used by the content API: `2021-03-25T19:25:28+0000`.
const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A document's publication instant, normalized to UTC.
///
/// Serializes to its canonical string (RFC 3339, seconds, `Z` suffix) so
/// that the same instant always produces the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicationDate(DateTime<Utc>);

impl PublicationDate {
    /// Parses either the API's `+0000` offset form or RFC 3339.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, API_TIMESTAMP_FORMAT))
            .map(|parsed| Self(parsed.with_timezone(&Utc)))
            .map_err(|e| ValidationError::InvalidTimestamp {
                value: raw.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn canonical(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl From<DateTime<Utc>> for PublicationDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl Serialize for PublicationDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.canonical().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PublicationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PublicationDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_api_offset_format() {
        let date = PublicationDate::parse("2021-03-25T19:25:28+0000").unwrap();
        assert_eq!(date.canonical(), "2021-03-25T19:25:28Z");
    }

    #[test]
    fn test_normalizes_offsets_to_utc() {
        let date = PublicationDate::parse("2021-03-25T19:25:28-0300").unwrap();
        assert_eq!(date.canonical(), "2021-03-25T22:25:28Z");

        let rfc = PublicationDate::parse("2021-03-25T22:25:28+00:00").unwrap();
        assert_eq!(rfc, date);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(PublicationDate::parse("yesterday").is_err());
        assert!(PublicationDate::parse("").is_err());
    }

    #[test]
    fn test_serializes_canonically() {
        let date: Option<PublicationDate> =
            serde_json::from_str("\"2021-04-19T12:00:00+0000\"").unwrap();
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            "\"2021-04-19T12:00:00Z\""
        );

        let missing: Option<PublicationDate> = serde_json::from_str("null").unwrap();
        assert_eq!(missing, None);
    }
}
