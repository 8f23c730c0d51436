//! Lazy multi-page traversal

use super::types::{Page, QueryWindow};
use crate::error::{Error, Result};
use crate::types::{EntityKind, Record};
use async_trait::async_trait;
use futures::stream::{self, Stream};
use std::collections::HashSet;
use std::pin::Pin;
use tracing::debug;

/// Stream of records spanning every page of a traversal
pub type RecordStream<'a> = Pin<Box<dyn Stream<Item = Result<Record>> + Send + 'a>>;

/// Anything that can fetch one page of a collection
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page of `kind` bounded by `window`
    async fn fetch_page(&self, kind: EntityKind, window: &QueryWindow) -> Result<Page>;
}

enum Traversal {
    Fetching(QueryWindow),
    Yielding {
        records: std::vec::IntoIter<Record>,
        next: Option<String>,
        window: QueryWindow,
    },
    Done,
}

/// Traverse every page of `kind` starting at `window`
///
/// The first request is made on the first poll. Errors end the stream: a
/// failing fetch or an undecodable `next` cursor is yielded once, after the
/// records of the preceding page, and nothing follows it. A cursor that
/// leads back to a window already fetched in this traversal is malformed.
pub fn paginate<'a, S>(source: &'a S, kind: EntityKind, window: QueryWindow) -> RecordStream<'a>
where
    S: PageSource + ?Sized,
{
    Box::pin(stream::unfold(
        (Traversal::Fetching(window), HashSet::new()),
        move |(mut state, mut visited)| async move {
            loop {
                state = match state {
                    Traversal::Done => return None,

                    Traversal::Fetching(window) => {
                        visited.insert(visit_key(&window));
                        let fetched = source.fetch_page(kind, &window).await;
                        match fetched {
                            Ok(page) => {
                                debug!(
                                    "Fetched {} page at offset {:?}: {} of {:?} records, last={}",
                                    kind,
                                    window.offset,
                                    page.results.len(),
                                    page.count(),
                                    page.is_last()
                                );
                                let next = page.next_url().map(str::to_string);
                                Traversal::Yielding {
                                    records: page.results.into_iter(),
                                    next,
                                    window,
                                }
                            }
                            Err(e) => return Some((Err(e), (Traversal::Done, visited))),
                        }
                    }

                    Traversal::Yielding {
                        mut records,
                        next,
                        window,
                    } => {
                        if let Some(record) = records.next() {
                            return Some((
                                Ok(record),
                                (
                                    Traversal::Yielding {
                                        records,
                                        next,
                                        window,
                                    },
                                    visited,
                                ),
                            ));
                        }
                        match next {
                            None => return None,
                            Some(cursor) => match advance(&visited, &cursor) {
                                Ok(next_window) => Traversal::Fetching(next_window),
                                Err(e) => return Some((Err(e), (Traversal::Done, visited))),
                            },
                        }
                    }
                };
            }
        },
    ))
}

/// Decode the window for the next page, rejecting windows already fetched
fn advance(visited: &HashSet<QueryWindow>, cursor: &str) -> Result<QueryWindow> {
    let next = QueryWindow::from_next_url(cursor)?;
    if visited.contains(&visit_key(&next)) {
        return Err(Error::malformed_cursor(
            cursor,
            "cursor leads back to a page already fetched",
        ));
    }
    Ok(next)
}

/// Identity of a window for cycle detection; no offset means offset 0
fn visit_key(window: &QueryWindow) -> QueryWindow {
    QueryWindow {
        offset: Some(window.offset.unwrap_or(0)),
        ..window.clone()
    }
}
