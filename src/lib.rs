//! # VARIoT client
//!
//! Async client for the VARIoT vulnerability and exploit database API.
//!
//! ## Features
//!
//! - **Record lookup**: fetch a vulnerability or exploit by id, plain or JSON-LD
//! - **Windowed pages**: fetch one page of records between two timestamps
//! - **Lazy traversal**: stream every record of a window across pages, following
//!   the server's `next` cursor
//! - **API keys**: `Authorization: Token <key>` on every request once set
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use variot_client::{QueryWindow, Result, VariotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = VariotClient::from_url("https://www.variotdbs.pl/")?;
//!     if !client.is_up().await {
//!         return Ok(());
//!     }
//!
//!     let vuln = client.get_vulnerability("VAR-202405-2633", false).await?;
//!     println!("{}", vuln["id"]);
//!
//!     let mut exploits = client.iter_exploits(QueryWindow::new().limit(5));
//!     while let Some(exploit) = exploits.try_next().await? {
//!         println!("{}", exploit["id"]);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      VariotClient                        │
//! │  get_vulnerability / get_exploit      is_up              │
//! │  get_vulnerabilities / get_exploits   iter_* → Stream    │
//! └──────────────────────────────────────────────────────────┘
//!                 │                              │
//! ┌───────────────┴──────────┐   ┌───────────────┴──────────┐
//! │   HTTP + Auth            │   │   Pagination             │
//! │   URL building, Token    │   │   QueryWindow, Page,     │
//! │   header, JSON decoding  │   │   cursor decoding        │
//! └──────────────────────────┘   └──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// API key handling
pub mod auth;

/// HTTP transport
pub mod http;

/// Windows, pages and lazy traversal
pub mod pagination;

/// Record client
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::VariotClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{Page, QueryWindow, RecordStream};
pub use types::{EntityKind, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
