//! Parsing helpers for server-side timestamps
//!
//! The reservation backend serialises local date-times without a zone
//! (`2024-06-20T14:00:00`, sometimes without seconds). Values carrying an
//! explicit offset are accepted and normalised to UTC.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::constants::WINDOW_TIMESTAMP_FORMAT;

const FALLBACK_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parse a remote timestamp into a naive local date-time.
pub fn parse_remote_timestamp(value: &str) -> Result<NaiveDateTime, String> {
    let trimmed = value.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_utc());
    }

    if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
        return Ok(naive);
    }

    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| format!("invalid timestamp '{value}'"))
}

/// Format a timestamp the way the reservation API expects window bounds.
pub fn format_window_timestamp(value: &NaiveDateTime) -> String {
    value.format(WINDOW_TIMESTAMP_FORMAT).to_string()
}

/// serde adapter for `#[serde(with = "...")]` on remote timestamp fields.
pub mod remote {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_window_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_remote_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}
