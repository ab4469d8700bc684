//! Wire shapes for the backend JSON API and their conversion into domain
//! types.
//!
//! Conversion is lenient on rendering paths: records that fail their
//! structural constraints are skipped with a warning, and malformed optional
//! fields degrade to a default instead of failing the whole payload.

use chrono::{DateTime, Utc};

pub mod categories;
pub mod products;
pub mod regions;

/// Parses an RFC 3339 timestamp, returning `None` (with a warning) when the
/// value is absent, empty or unparseable.
pub(crate) fn parse_timestamp(field: &'static str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("Unparseable {field} timestamp {raw:?}: {e}");
            None
        }
    }
}
