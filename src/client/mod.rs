//! VARIoT record client
//!
//! The public entry point of the crate. A `VariotClient` is bound to one
//! instance and offers:
//!
//! - single entity lookups (`get_vulnerability`, `get_exploit`)
//! - single page fetches (`get_vulnerabilities`, `get_exploits`)
//! - lazy traversal of every page (`iter_vulnerabilities`, `iter_exploits`)
//! - a reachability probe (`is_up`)
//!
//! ```rust,ignore
//! use chrono::{TimeZone, Utc};
//! use futures::TryStreamExt;
//! use variot_client::{QueryWindow, VariotClient};
//!
//! let client = VariotClient::from_url("https://www.variotdbs.pl/")?;
//! client.set_api_key("0123456789abcdef").await;
//!
//! let window = QueryWindow::new()
//!     .since(Utc.with_ymd_and_hms(2024, 6, 2, 22, 0, 0).unwrap())
//!     .before(Utc.with_ymd_and_hms(2024, 6, 2, 23, 0, 0).unwrap())
//!     .limit(20);
//! let vulns: Vec<_> = client.iter_vulnerabilities(window).try_collect().await?;
//! ```

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{paginate, Page, PageSource, QueryWindow, RecordStream};
use crate::types::{EntityKind, JsonValue, Record};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

/// Client for one VARIoT instance
///
/// Cloning is cheap; clones share the connection pool and the API key.
#[derive(Debug, Clone)]
pub struct VariotClient {
    http: HttpClient,
}

impl VariotClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client for `root_url` with default settings
    pub fn from_url(root_url: impl Into<String>) -> Result<Self> {
        Self::new(&ClientConfig::builder().root_url(root_url).build())
    }

    /// Normalized root URL of the instance
    pub fn root_url(&self) -> &str {
        self.http.root_url().as_str()
    }

    // ========================================================================
    // Credentials
    // ========================================================================

    /// Use `key` for every subsequent request, including those of
    /// traversals already in progress on this client or its clones
    pub async fn set_api_key(&self, key: impl Into<String>) {
        self.http.authenticator().set_api_key(key).await;
    }

    /// Stop sending an API key
    pub async fn clear_api_key(&self) {
        self.http.authenticator().clear().await;
    }

    /// Currently installed API key
    pub async fn api_key(&self) -> Option<String> {
        self.http.authenticator().api_key().await
    }

    // ========================================================================
    // Reachability
    // ========================================================================

    /// Probe the instance root with a HEAD request
    ///
    /// Returns `true` only for `200 OK`. Transport failures yield `false`
    /// instead of an error.
    pub async fn is_up(&self) -> bool {
        match self.http.head(self.http.root_url().clone()).await {
            Ok(status) => status == StatusCode::OK,
            Err(e) => {
                warn!("Reachability probe of {} failed: {}", self.root_url(), e);
                false
            }
        }
    }

    // ========================================================================
    // Single entities
    // ========================================================================

    /// Fetch one entity by id
    ///
    /// The body is returned as sent. An unknown id or a rejected key yields
    /// the server's error object, not an `Err`.
    pub async fn fetch_one(&self, kind: EntityKind, id: &str, jsonld: bool) -> Result<Record> {
        let url = self.http.build_url(["api", kind.single_segment(), id])?;
        let config =
            RequestConfig::new().query_pairs(QueryWindow::new().jsonld(jsonld).to_query_pairs());

        debug!("Fetching {} {}", kind, id);
        match self.http.get_json(url, config).await? {
            JsonValue::Object(record) => Ok(record),
            other => Err(Error::decode(format!(
                "expected a JSON object for {kind} {id}, got {other}"
            ))),
        }
    }

    /// Fetch a vulnerability by id (`VAR-YYYYMM-NNNN`)
    pub async fn get_vulnerability(&self, id: &str, jsonld: bool) -> Result<Record> {
        self.fetch_one(EntityKind::Vulnerability, id, jsonld).await
    }

    /// Fetch an exploit by id (`VAR-E-YYYYMM-NNNN`)
    pub async fn get_exploit(&self, id: &str, jsonld: bool) -> Result<Record> {
        self.fetch_one(EntityKind::Exploit, id, jsonld).await
    }

    // ========================================================================
    // Pages
    // ========================================================================

    /// Fetch the single page of `kind` bounded by `window`
    pub async fn fetch_page(&self, kind: EntityKind, window: &QueryWindow) -> Result<Page> {
        let url = self.http.build_url(["api", kind.collection_segment()])?;
        let config = RequestConfig::new().query_pairs(window.to_query_pairs());

        let body = self.http.get_json(url, config).await?;
        Page::from_value(body)
    }

    /// Fetch one page of vulnerabilities
    pub async fn get_vulnerabilities(&self, window: &QueryWindow) -> Result<Page> {
        self.fetch_page(EntityKind::Vulnerability, window).await
    }

    /// Fetch one page of exploits
    pub async fn get_exploits(&self, window: &QueryWindow) -> Result<Page> {
        self.fetch_page(EntityKind::Exploit, window).await
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Stream every record of `kind` matching `window`, across pages
    pub fn iterate(&self, kind: EntityKind, window: QueryWindow) -> RecordStream<'_> {
        paginate(self, kind, window)
    }

    /// Stream every vulnerability matching `window`
    pub fn iter_vulnerabilities(&self, window: QueryWindow) -> RecordStream<'_> {
        self.iterate(EntityKind::Vulnerability, window)
    }

    /// Stream every exploit matching `window`
    pub fn iter_exploits(&self, window: QueryWindow) -> RecordStream<'_> {
        self.iterate(EntityKind::Exploit, window)
    }
}

#[async_trait]
impl PageSource for VariotClient {
    async fn fetch_page(&self, kind: EntityKind, window: &QueryWindow) -> Result<Page> {
        VariotClient::fetch_page(self, kind, window).await
    }
}

#[cfg(test)]
mod tests;
