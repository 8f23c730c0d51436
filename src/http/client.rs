//! HTTP client
//!
//! Provides the transport used by the record client:
//! - URL construction relative to the instance root
//! - API key attachment through the shared `Authenticator`
//! - JSON body decoding without status translation

use crate::auth::Authenticator;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use reqwest::{Client, Method, StatusCode};
use tracing::debug;
use url::Url;

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, in the order they are sent
    pub query: Vec<(String, String)>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add several query parameters
    #[must_use]
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }
}

/// HTTP client bound to one VARIoT instance
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    root: Url,
    authenticator: Authenticator,
}

impl HttpClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let root = Url::parse(&config.normalized_root())?;

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.effective_user_agent());

        if let Some(proxy) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::config(format!("Invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            root,
            authenticator: Authenticator::new(config.api_key.clone()),
        })
    }

    /// Root URL every request is resolved against
    pub fn root_url(&self) -> &Url {
        &self.root
    }

    /// Authenticator shared by every request made through this client
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Build a URL by appending percent-encoded path segments to the root
    pub fn build_url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.root.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::config(format!("Root URL cannot be a base: {}", self.root)))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Make a request and decode the JSON body
    ///
    /// The status code is only logged: error payloads are decoded and
    /// returned like any other body.
    pub async fn request_json(
        &self,
        method: Method,
        url: Url,
        config: RequestConfig,
    ) -> Result<JsonValue> {
        let mut req = self.client.request(method.clone(), url.clone());

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }
        req = self.authenticator.apply(req).await;

        let response = req.send().await?;
        let status = response.status();
        debug!("{} {} -> {}", method, url, status.as_u16());

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Make a GET request and decode the JSON body
    pub async fn get_json(&self, url: Url, config: RequestConfig) -> Result<JsonValue> {
        self.request_json(Method::GET, url, config).await
    }

    /// Make a HEAD request and return the status
    pub async fn head(&self, url: Url) -> Result<StatusCode> {
        let req = self.authenticator.apply(self.client.head(url.clone())).await;
        let response = req.send().await?;
        debug!("HEAD {} -> {}", url, response.status().as_u16());
        Ok(response.status())
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("root", &self.root.as_str())
            .field("authenticator", &self.authenticator)
            .finish_non_exhaustive()
    }
}
