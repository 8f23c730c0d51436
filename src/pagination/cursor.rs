//! Next-page cursor decoding
//!
//! Both collections use the same policy:
//! - `since` / `before`: absent or empty means no bound, otherwise must be
//!   an ISO-8601 timestamp
//! - `limit` / `offset`: required non-negative integers
//! - `jsonld`: absent, empty, `False`, `false` or `0` means off

use super::types::QueryWindow;
use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::collections::HashMap;
use url::Url;

impl QueryWindow {
    /// Decode the window encoded in a `next` URL
    ///
    /// Relative URLs and bare query strings are accepted as well.
    pub fn from_next_url(next: &str) -> Result<Self> {
        let query = match Url::parse(next) {
            Ok(url) => url.query().unwrap_or_default().to_string(),
            Err(_) => next
                .split_once('?')
                .map_or(next, |(_, query)| query)
                .to_string(),
        };

        // repeated keys: last one wins
        let params: HashMap<String, String> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .filter(|(_, value)| !value.is_empty())
            .collect();

        Ok(Self {
            since: optional_timestamp(next, &params, "since")?,
            before: optional_timestamp(next, &params, "before")?,
            limit: Some(required_integer(next, &params, "limit")?),
            offset: Some(required_integer(next, &params, "offset")?),
            jsonld: params
                .get("jsonld")
                .is_some_and(|value| !matches!(value.as_str(), "False" | "false" | "0")),
        })
    }
}

fn optional_timestamp(
    cursor: &str,
    params: &HashMap<String, String>,
    key: &str,
) -> Result<Option<DateTime<Utc>>> {
    match params.get(key) {
        None => Ok(None),
        Some(raw) => parse_timestamp(raw).map(Some).ok_or_else(|| {
            Error::malformed_cursor(cursor, format!("invalid timestamp for '{key}': {raw}"))
        }),
    }
}

fn required_integer(cursor: &str, params: &HashMap<String, String>, key: &str) -> Result<u64> {
    let raw = params
        .get(key)
        .ok_or_else(|| Error::malformed_cursor(cursor, format!("missing '{key}'")))?;
    raw.trim().parse().map_err(|_| {
        Error::malformed_cursor(cursor, format!("invalid integer for '{key}': {raw}"))
    })
}

/// Parse an ISO-8601 timestamp
///
/// Accepts RFC 3339 with any offset, naive date-times (taken as UTC) and
/// bare dates (midnight UTC). A `+` offset that was decoded to a space by
/// form decoding is restored.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let mut candidates = vec![raw.to_string()];
    if let Some(idx) = raw.rfind(' ') {
        let mut restored = raw.to_string();
        restored.replace_range(idx..=idx, "+");
        candidates.push(restored);
    }

    for candidate in &candidates {
        if let Ok(dt) = DateTime::parse_from_rfc3339(candidate) {
            return Some(dt.with_timezone(&Utc));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(candidate, format) {
                return Some(naive.and_utc());
            }
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
