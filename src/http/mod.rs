//! HTTP transport module
//!
//! Thin wrapper over `reqwest` that resolves paths against the configured
//! root, attaches the API key, and decodes JSON bodies.
//!
//! There are no retries, no rate limiting and no caching: a transport
//! failure is reported to the caller on the first attempt.

mod client;

pub use client::{HttpClient, RequestConfig};
