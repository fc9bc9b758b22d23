// src/api/fetcher.rs
//! Recursive materialization of record lists and block trees.
//!
//! The descent is depth-first and pre-order: a block's children are
//! fully fetched and attached before its next sibling's subtree is
//! requested, and a record's whole tree is resolved before rendering
//! begins. Per-parent child order is never changed.

use super::pagination::{collect_all_pages, PageCollection, TruncationReason};
use super::NotionRepository;
use crate::constants::MAX_FETCH_DEPTH;
use crate::error::AppError;
use crate::model::{Block, Record};
use crate::types::{BlockId, DatabaseId};
use futures::future::BoxFuture;

/// Fetches records and their fully materialized block trees.
pub struct BlockTreeFetcher<R> {
    repo: R,
    max_depth: u8,
}

impl<R: NotionRepository> BlockTreeFetcher<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            max_depth: MAX_FETCH_DEPTH,
        }
    }

    pub fn with_max_depth(repo: R, max_depth: u8) -> Self {
        let max_depth = max_depth.min(MAX_FETCH_DEPTH);
        Self { repo, max_depth }
    }

    /// Lists every record under the parent container.
    pub async fn query_records(&self, database: &DatabaseId) -> PageCollection<Record> {
        collect_all_pages(|page_size, cursor| {
            self.repo.query_records_page(database, page_size, cursor)
        })
        .await
    }

    /// Fetches the complete ordered child tree below one identifier.
    ///
    /// The returned collection's termination reports whether any
    /// nested pagination loop stopped early; the items are the
    /// best-effort tree gathered up to that point.
    pub async fn fetch_block_tree(&self, root: &BlockId) -> PageCollection<Block> {
        self.fetch_children_at(root.clone(), 0).await
    }

    /// Attaches a record's block tree in place, returning the parse of
    /// the record identifier into the block namespace plus the fetch
    /// diagnostic.
    pub async fn materialize(&self, record: &mut Record) -> Result<PageCollection<()>, AppError> {
        let root = BlockId::parse(record.id.as_str())?;
        let tree = self.fetch_block_tree(&root).await;
        let diagnostic = PageCollection {
            items: Vec::new(),
            pages_fetched: tree.pages_fetched,
            termination: tree.termination.clone(),
        };
        record.blocks = tree.items;
        Ok(diagnostic)
    }

    fn fetch_children_at(&self, parent: BlockId, depth: u8) -> BoxFuture<'_, PageCollection<Block>> {
        Box::pin(async move {
            if depth >= self.max_depth {
                log::warn!(
                    "Not descending below block {}: depth bound {} reached",
                    parent,
                    self.max_depth
                );
                return PageCollection::truncated_empty(TruncationReason::DepthLimit { depth });
            }

            let mut collection = collect_all_pages(|page_size, cursor| {
                self.repo.list_children_page(&parent, page_size, cursor)
            })
            .await;

            for index in 0..collection.items.len() {
                if !collection.items[index].has_children() {
                    continue;
                }
                let child_id = collection.items[index].id().clone();
                let subtree = self.fetch_children_at(child_id, depth + 1).await;
                collection.absorb_termination(subtree.termination.clone());
                collection.items[index].set_children(subtree.items);
            }

            collection
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pagination::{Paginated, Termination};
    use crate::model::{BlockCommon, ParagraphBlock, TextBlockContent};
    use crate::types::RichTextItem;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    struct MockRepo {
        /// Scripted children pages keyed by parent id, each entry one
        /// page in request order; `None` scripts a request failure.
        children: Mutex<HashMap<String, Vec<Option<Paginated<Block>>>>>,
        requests: AtomicU32,
    }

    impl MockRepo {
        fn new(children: HashMap<String, Vec<Option<Paginated<Block>>>>) -> Self {
            Self {
                children: Mutex::new(children),
                requests: AtomicU32::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl NotionRepository for MockRepo {
        async fn query_records_page(
            &self,
            _database: &DatabaseId,
            _page_size: u32,
            _cursor: Option<String>,
        ) -> Result<Paginated<Record>, AppError> {
            unimplemented!("record queries are exercised in pipeline tests")
        }

        async fn list_children_page(
            &self,
            parent: &BlockId,
            _page_size: u32,
            _cursor: Option<String>,
        ) -> Result<Paginated<Block>, AppError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let mut children = self.children.lock().unwrap();
            let pages = children
                .get_mut(parent.as_str())
                .unwrap_or_else(|| panic!("unexpected children request for {}", parent));
            match pages.remove(0) {
                Some(page) => Ok(page),
                None => Err(AppError::MalformedResponse("scripted failure".into())),
            }
        }
    }

    fn block_id(label: u8) -> BlockId {
        BlockId::parse(&format!("{:032x}", label)).unwrap()
    }

    fn paragraph(label: u8, text: &str, has_children: bool) -> Block {
        Block::Paragraph(ParagraphBlock {
            common: BlockCommon {
                id: block_id(label),
                has_children,
                archived: false,
                children: Vec::new(),
            },
            content: TextBlockContent::new(vec![RichTextItem::plain(text)]),
        })
    }

    fn page(blocks: Vec<Block>, next: Option<&str>, has_more: bool) -> Option<Paginated<Block>> {
        Some(Paginated {
            results: blocks,
            next_cursor: next.map(str::to_string),
            has_more,
        })
    }

    #[tokio::test]
    async fn resolves_children_depth_first_before_next_sibling() {
        let root = block_id(1);
        let mut script = HashMap::new();
        script.insert(
            root.as_str().to_string(),
            vec![page(
                vec![paragraph(2, "branch", true), paragraph(3, "leaf", false)],
                None,
                false,
            )],
        );
        script.insert(
            block_id(2).as_str().to_string(),
            vec![page(vec![paragraph(4, "nested", false)], None, false)],
        );

        let fetcher = BlockTreeFetcher::new(MockRepo::new(script));
        let tree = fetcher.fetch_block_tree(&root).await;

        assert!(tree.is_complete());
        assert_eq!(tree.items.len(), 2);
        assert_eq!(tree.items[0].children().len(), 1);
        assert_eq!(tree.items[0].children()[0].id(), &block_id(4));
        assert!(tree.items[1].children().is_empty());
    }

    #[tokio::test]
    async fn paginates_children_across_pages_in_order() {
        let root = block_id(1);
        let mut script = HashMap::new();
        script.insert(
            root.as_str().to_string(),
            vec![
                page(vec![paragraph(2, "a", false)], Some("c"), true),
                page(vec![paragraph(3, "b", false)], None, false),
            ],
        );

        let fetcher = BlockTreeFetcher::new(MockRepo::new(script));
        let tree = fetcher.fetch_block_tree(&root).await;

        assert_eq!(tree.pages_fetched, 2);
        let ids: Vec<_> = tree.items.iter().map(|b| b.id().clone()).collect();
        assert_eq!(ids, vec![block_id(2), block_id(3)]);
    }

    #[tokio::test]
    async fn nested_failure_truncates_but_keeps_collected_items() {
        let root = block_id(1);
        let mut script = HashMap::new();
        script.insert(
            root.as_str().to_string(),
            vec![page(
                vec![paragraph(2, "a", false), paragraph(3, "b", true)],
                None,
                false,
            )],
        );
        // The branch under block 3 fails on its first page.
        script.insert(block_id(3).as_str().to_string(), vec![None]);

        let fetcher = BlockTreeFetcher::new(MockRepo::new(script));
        let tree = fetcher.fetch_block_tree(&root).await;

        assert_eq!(tree.items.len(), 2);
        assert!(tree.items[1].children().is_empty());
        assert!(matches!(
            tree.termination,
            Termination::Truncated {
                reason: TruncationReason::RequestFailed { page: 1, .. }
            }
        ));
    }

    #[tokio::test]
    async fn depth_bound_stops_the_descent() {
        let root = block_id(1);
        let mut script = HashMap::new();
        // Root's only child claims children, but the bound is 1 level.
        script.insert(
            root.as_str().to_string(),
            vec![page(vec![paragraph(2, "deep", true)], None, false)],
        );

        let repo = MockRepo::new(script);
        let fetcher = BlockTreeFetcher::with_max_depth(repo, 1);
        let tree = fetcher.fetch_block_tree(&root).await;

        assert_eq!(tree.items.len(), 1);
        assert!(tree.items[0].children().is_empty());
        assert_eq!(
            tree.termination,
            Termination::Truncated {
                reason: TruncationReason::DepthLimit { depth: 1 }
            }
        );
        // Exactly one request: the bound prevented the second.
        assert_eq!(fetcher.repo.requests.load(Ordering::SeqCst), 1);
    }
}
