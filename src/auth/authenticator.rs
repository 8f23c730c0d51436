//! Authenticator implementation
//!
//! Holds the API key for a client and applies it to requests.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Scheme prefix the server expects in the `Authorization` header
pub const AUTH_SCHEME: &str = "Token";

/// Applies the configured API key to HTTP requests
///
/// Clones share the same key: replacing it through one handle affects every
/// request made through any other, including traversals already in progress.
#[derive(Clone, Default)]
pub struct Authenticator {
    api_key: Arc<RwLock<Option<String>>>,
}

impl Authenticator {
    /// Create an authenticator with an optional initial key
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: Arc::new(RwLock::new(api_key.filter(|k| !k.is_empty()))),
        }
    }

    /// Replace the API key used for all subsequent requests
    pub async fn set_api_key(&self, key: impl Into<String>) {
        let key = key.into();
        debug!("Installing API key");
        *self.api_key.write().await = Some(key).filter(|k| !k.is_empty());
    }

    /// Remove the API key
    pub async fn clear(&self) {
        *self.api_key.write().await = None;
    }

    /// Current API key, if any
    pub async fn api_key(&self) -> Option<String> {
        self.api_key.read().await.clone()
    }

    /// Apply authentication to a request builder
    pub async fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self.api_key.read().await.as_deref() {
            Some(key) => req.header(AUTHORIZATION, format!("{AUTH_SCHEME} {key}")),
            None => req,
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the key itself
        f.debug_struct("Authenticator").finish_non_exhaustive()
    }
}
