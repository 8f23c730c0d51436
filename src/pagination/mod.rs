//! Pagination module
//!
//! Turns the server's page-by-page collection endpoints into one lazy
//! stream of records.
//!
//! # Overview
//!
//! Each collection response carries a `next` URL whose query string encodes
//! the window for the following page. The paginator fetches a page, yields
//! its records in order, decodes `next` into a fresh [`QueryWindow`], and
//! repeats until a page has no `next`. The stream is pull-based: nothing is
//! fetched until the consumer polls, and dropping it stops the traversal.

mod cursor;
mod stream;
mod types;

pub use cursor::parse_timestamp;
pub use stream::{paginate, PageSource, RecordStream};
pub use types::{Page, QueryWindow};
