// src/api/mod.rs
//! Remote access: HTTP client, pagination, wire parsing, and the
//! recursive tree fetcher.

pub mod client;
pub mod fetcher;
pub mod pagination;
pub mod responses;

use crate::error::AppError;
use crate::model::{Block, Record};
use crate::types::{BlockId, DatabaseId};
use pagination::Paginated;

pub use client::NotionHttpClient;
pub use fetcher::BlockTreeFetcher;
pub use pagination::{PageCollection, Termination, TruncationReason};

/// One page of each remote listing endpoint.
///
/// This is the seam between traversal logic and HTTP: the fetcher is
/// tested against scripted implementations, production wires in
/// `NotionHttpClient`.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// One page of the record listing under a parent container.
    async fn query_records_page(
        &self,
        database: &DatabaseId,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Paginated<Record>, AppError>;

    /// One page of a block's (or record root's) direct children.
    async fn list_children_page(
        &self,
        parent: &BlockId,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<Paginated<Block>, AppError>;
}
