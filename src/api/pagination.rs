// src/api/pagination.rs
//! Cursor-driven pagination over the remote listing endpoints.
//!
//! Both listing endpoints (record query and block children) speak the
//! same protocol: request `{page_size, start_cursor?}`, receive
//! `{results, next_cursor, has_more}`. The loop here never raises: a
//! failed request terminates the loop and the collection records *why*
//! it stopped, so callers decide whether partial data is acceptable
//! instead of the loss happening silently.

use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::future::Future;

/// One page of a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Why a pagination loop stopped early.
#[derive(Debug, Clone, PartialEq)]
pub enum TruncationReason {
    /// A request or parse failure on the given 1-based page number.
    RequestFailed { page: u32, message: String },
    /// The recursive descent hit the configured depth bound.
    DepthLimit { depth: u8 },
}

impl fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { page, message } => {
                write!(f, "request for page {} failed: {}", page, message)
            }
            Self::DepthLimit { depth } => {
                write!(f, "children below depth {} were not fetched", depth)
            }
        }
    }
}

/// How a collection loop ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// The source reported no more pages.
    Exhausted,
    /// The loop stopped before the source was exhausted.
    Truncated { reason: TruncationReason },
}

/// The items gathered by one (possibly recursive) collection, plus the
/// diagnostic of how gathering ended.
#[derive(Debug, Clone)]
pub struct PageCollection<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
    pub termination: Termination,
}

impl<T> PageCollection<T> {
    pub fn is_complete(&self) -> bool {
        matches!(self.termination, Termination::Exhausted)
    }

    /// An empty collection that stopped for the given reason.
    pub fn truncated_empty(reason: TruncationReason) -> Self {
        Self {
            items: Vec::new(),
            pages_fetched: 0,
            termination: Termination::Truncated { reason },
        }
    }

    /// Folds a nested collection's termination into this one. The first
    /// truncation reason wins; later ones describe the same degraded
    /// build.
    pub fn absorb_termination(&mut self, other: Termination) {
        if matches!(self.termination, Termination::Exhausted) {
            self.termination = other;
        }
    }
}

/// Drives one cursor loop to completion, collecting every page's items
/// in order.
///
/// A failed request terminates the loop with the items collected so
/// far; the error is logged and carried in the termination diagnostic.
pub async fn collect_all_pages<T, F, Fut>(mut fetch: F) -> PageCollection<T>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: Future<Output = Result<Paginated<T>, AppError>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages_fetched = 0u32;

    loop {
        match fetch(NOTION_API_PAGE_SIZE, cursor.take()).await {
            Ok(page) => {
                pages_fetched += 1;
                items.extend(page.results);
                cursor = page.next_cursor;
                if !page.has_more || cursor.is_none() {
                    return PageCollection {
                        items,
                        pages_fetched,
                        termination: Termination::Exhausted,
                    };
                }
            }
            Err(err) => {
                let failed_page = pages_fetched + 1;
                log::warn!(
                    "Pagination stopped on page {}: {} ({} items collected)",
                    failed_page,
                    err,
                    items.len()
                );
                return PageCollection {
                    items,
                    pages_fetched,
                    termination: Termination::Truncated {
                        reason: TruncationReason::RequestFailed {
                            page: failed_page,
                            message: err.to_string(),
                        },
                    },
                };
            }
        }
    }
}
