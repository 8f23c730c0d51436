//! Client configuration
//!
//! A `ClientConfig` is attached to one client instance at construction.
//! It can be built in code or loaded from a YAML file:
//!
//! ```yaml
//! root_url: https://www.variotdbs.pl/
//! api_key: 0123456789abcdef
//! proxy: http://proxy.internal:3128
//! timeout_ms: 10000
//! ```

use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Public VARIoT instance
pub const DEFAULT_ROOT_URL: &str = "https://www.variotdbs.pl/";

/// Configuration for a VARIoT client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// Root URL of the instance to query
    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// User agent sent with every request
    #[serde(default)]
    pub user_agent: Option<String>,

    /// API key, sent as `Authorization: Token <key>`
    #[serde(default)]
    pub api_key: Option<String>,

    /// Proxy used for all schemes
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in milliseconds, must be non-zero
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_root_url() -> String {
    DEFAULT_ROOT_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            user_agent: None,
            api_key: None,
            proxy: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Root URL with a scheme and a trailing slash
    pub fn normalized_root(&self) -> String {
        normalize_root_url(&self.root_url)
    }

    /// User agent to send, falling back to the crate name and version
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .none_if_empty()
            .unwrap_or_else(|| format!("variot-client/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the values a client cannot be built from
    pub fn validate(&self) -> Result<()> {
        if self.timeout_ms == 0 {
            return Err(Error::config("timeout must be greater than zero"));
        }
        Ok(())
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the root URL
    pub fn root_url(mut self, url: impl Into<String>) -> Self {
        self.config.root_url = url.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Prepend `http://` when no scheme is given and ensure a trailing slash
pub fn normalize_root_url(root: &str) -> String {
    let root = root.trim();
    let mut url = if root.contains("://") {
        root.to_string()
    } else {
        format!("http://{root}")
    };
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
