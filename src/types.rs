//! Common types used throughout the VARIoT client
//!
//! Type aliases for the opaque JSON records the service returns, and the
//! entity kinds it serves.

use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single vulnerability or exploit, exactly as the server sent it
pub type Record = JsonObject;

// ============================================================================
// Entity Kind
// ============================================================================

/// The two record categories served by a VARIoT instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vulnerability,
    Exploit,
}

impl EntityKind {
    /// Path segment for a single entity (`/api/vuln/{id}`)
    pub fn single_segment(self) -> &'static str {
        match self {
            EntityKind::Vulnerability => "vuln",
            EntityKind::Exploit => "exploit",
        }
    }

    /// Path segment for the collection (`/api/vulns`)
    pub fn collection_segment(self) -> &'static str {
        match self {
            EntityKind::Vulnerability => "vulns",
            EntityKind::Exploit => "exploits",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Vulnerability => write!(f, "vulnerability"),
            EntityKind::Exploit => write!(f, "exploit"),
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}
