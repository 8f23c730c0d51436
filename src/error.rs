//! Error types for the VARIoT client
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! A server-reported error payload from a single-record lookup comes back as
//! an ordinary decoded body. During paging it is a `Decode` error.

use thiserror::Error;

/// The main error type for the VARIoT client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unable to reach {url}. Is the server up?")]
    Unreachable { url: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Malformed next-page cursor '{cursor}': {message}")]
    MalformedCursor { cursor: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a malformed cursor error
    pub fn malformed_cursor(cursor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedCursor {
            cursor: cursor.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from the network layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Unreachable { .. })
    }
}

/// Result type alias for the VARIoT client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("bad root");
        assert_eq!(err.to_string(), "Configuration error: bad root");

        let err = Error::malformed_cursor("http://x/api/vulns?offset=a", "invalid offset");
        assert_eq!(
            err.to_string(),
            "Malformed next-page cursor 'http://x/api/vulns?offset=a': invalid offset"
        );

        let err = Error::Unreachable {
            url: "https://www.variotdbs.pl/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to reach https://www.variotdbs.pl/. Is the server up?"
        );
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::Unreachable {
            url: String::new()
        }
        .is_transport());
        assert!(!Error::decode("not an object").is_transport());
        assert!(!Error::malformed_cursor("", "").is_transport());
    }
}
