//! Pagination types
//!
//! The window bounding one page request, and the page the server returns.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters bounding one collection request
///
/// A new window is derived for every page; windows are never mutated in
/// place once a request has been built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryWindow {
    /// Inclusive start of the time window
    pub since: Option<DateTime<Utc>>,
    /// Exclusive end of the time window
    pub before: Option<DateTime<Utc>>,
    /// Maximum number of records per page
    pub limit: Option<u64>,
    /// Index of the first record to return
    pub offset: Option<u64>,
    /// Request the JSON-LD representation
    pub jsonld: bool,
}

impl QueryWindow {
    /// Create an unbounded window
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive start
    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Set the exclusive end
    #[must_use]
    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the starting offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Request the JSON-LD representation
    #[must_use]
    pub fn jsonld(mut self, jsonld: bool) -> Self {
        self.jsonld = jsonld;
        self
    }

    /// Encode the window as query parameters
    ///
    /// `jsonld` is always sent, spelled the way the server spells booleans.
    /// Unset bounds are omitted.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("jsonld".to_string(), encode_bool(self.jsonld).to_string())];
        if let Some(since) = self.since {
            pairs.push(("since".to_string(), since.to_rfc3339()));
        }
        if let Some(before) = self.before {
            pairs.push(("before".to_string(), before.to_rfc3339()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        pairs
    }
}

/// Boolean spelling used in the service's query strings
pub(crate) fn encode_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// One page of a collection response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Records in server order
    #[serde(default)]
    pub results: Vec<Record>,

    /// URL of the next page, absent on the last one
    #[serde(default)]
    pub next: Option<String>,

    /// Every other top-level key (`count`, `previous`)
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Page {
    /// Decode a page from a response body
    ///
    /// `null` and `{}` decode to an empty page that ends a traversal. Any
    /// other object without `results` is a server error payload and is
    /// reported as a decode error carrying that payload.
    pub fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(Self::default()),
            JsonValue::Object(map) if map.is_empty() => Ok(Self::default()),
            JsonValue::Object(map) if !map.contains_key("results") => Err(Error::decode(format!(
                "page has no 'results': {}",
                JsonValue::Object(map)
            ))),
            JsonValue::Object(map) => Ok(serde_json::from_value(JsonValue::Object(map))?),
            other => Err(Error::decode(format!(
                "expected a JSON object for a page, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Next page URL, treating an empty string as absent
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref().filter(|n| !n.is_empty())
    }

    /// Whether this is the last page
    pub fn is_last(&self) -> bool {
        self.next_url().is_none()
    }

    /// Total number of matching records, when the server reports it
    pub fn count(&self) -> Option<u64> {
        self.extra.get("count").and_then(JsonValue::as_u64)
    }
}

pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
