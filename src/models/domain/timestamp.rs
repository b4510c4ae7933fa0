//! Stored form of `created_at`.
//!
//! Records keep their creation time as a fixed-width RFC 3339 string with
//! microsecond precision (`2024-05-01T09:30:00.000000Z`). Equal width makes
//! the lexical order used by MongoDB sorts match chronological order, and
//! the `YYYY-MM-DDT` prefix is what the day filters select on. Reading
//! accepts any RFC 3339 precision.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn to_stored(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_stored(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}
