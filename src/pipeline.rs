// src/pipeline.rs
//! The end-to-end pipeline: list records, materialize each record's
//! block tree, and assemble the final documents.
//!
//! Each record's tree is built and consumed in isolation before the
//! next record starts; there is no shared mutable state between
//! records. Truncated fetches are surfaced as diagnostics — the build
//! proceeds best-effort unless `fail_on_incomplete` is set.

use crate::api::{BlockTreeFetcher, NotionRepository, Termination};
use crate::config::SourceConfig;
use crate::document::{assemble_document, DocumentNode};
use crate::error::AppError;

/// Drives fetch → normalize → render → assemble for one configured
/// parent container.
pub struct SourcePipeline<R> {
    fetcher: BlockTreeFetcher<R>,
    config: SourceConfig,
}

impl<R: NotionRepository> SourcePipeline<R> {
    pub fn new(repo: R, config: SourceConfig) -> Self {
        Self {
            fetcher: BlockTreeFetcher::with_max_depth(repo, config.max_depth),
            config,
        }
    }

    /// Builds one document per record under the configured container.
    pub async fn build_documents(&self) -> Result<Vec<DocumentNode>, AppError> {
        let records = self.fetcher.query_records(&self.config.database_id).await;
        if let Termination::Truncated { reason } = &records.termination {
            if self.config.fail_on_incomplete {
                return Err(AppError::IncompleteContent {
                    record_id: self.config.database_id.to_string(),
                    reason: reason.to_string(),
                });
            }
            log::warn!(
                "Record listing for {} is incomplete: {}",
                self.config.database_id,
                reason
            );
        }

        log::info!(
            "Fetched {} records from {} ({} pages)",
            records.items.len(),
            self.config.database_id,
            records.pages_fetched
        );

        let mut documents = Vec::with_capacity(records.items.len());
        for mut record in records.items {
            let diagnostic = self.fetcher.materialize(&mut record).await?;
            if let Termination::Truncated { reason } = &diagnostic.termination {
                if self.config.fail_on_incomplete {
                    return Err(AppError::IncompleteContent {
                        record_id: record.id.to_string(),
                        reason: reason.to_string(),
                    });
                }
                log::warn!("Content tree for record {} is incomplete: {}", record.id, reason);
            }
            documents.push(assemble_document(&record, &self.config)?);
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::pagination::Paginated;
    use crate::model::{Block, Record};
    use crate::types::{BlockId, DatabaseId};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Scripted repository: one record page, children by parent id.
    struct ScriptedRepo {
        records: Mutex<Vec<Result<Paginated<Record>, AppError>>>,
        children: Mutex<HashMap<String, Vec<Block>>>,
    }

    #[async_trait::async_trait]
    impl NotionRepository for ScriptedRepo {
        async fn query_records_page(
            &self,
            _database: &DatabaseId,
            _page_size: u32,
            _cursor: Option<String>,
        ) -> Result<Paginated<Record>, AppError> {
            self.records.lock().unwrap().remove(0)
        }

        async fn list_children_page(
            &self,
            parent: &BlockId,
            _page_size: u32,
            _cursor: Option<String>,
        ) -> Result<Paginated<Block>, AppError> {
            let blocks = self
                .children
                .lock()
                .unwrap()
                .remove(parent.as_str())
                .unwrap_or_default();
            Ok(Paginated {
                results: blocks,
                next_cursor: None,
                has_more: false,
            })
        }
    }

    fn sample_record() -> Record {
        crate::api::responses::record_from_value(&json!({
            "id": "0123456789abcdef0123456789abcdef",
            "archived": false,
            "created_time": "2021-01-01T00:00:00.000Z",
            "last_edited_time": "2021-01-02T00:00:00.000Z",
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "text": {"content": "Hi"}, "plain_text": "Hi"}]
                }
            }
        }))
        .unwrap()
    }

    fn sample_paragraph() -> Block {
        crate::api::responses::block_from_value(&json!({
            "id": "ffffffffffffffffffffffffffffffff",
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{"type": "text", "text": {"content": "World"}, "plain_text": "World"}]
            }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn builds_one_document_per_record() {
        let record = sample_record();
        let mut children = HashMap::new();
        children.insert(record.id.as_str().to_string(), vec![sample_paragraph()]);

        let repo = ScriptedRepo {
            records: Mutex::new(vec![Ok(Paginated {
                results: vec![record],
                next_cursor: None,
                has_more: false,
            })]),
            children: Mutex::new(children),
        };

        let pipeline = SourcePipeline::new(repo, SourceConfig::default());
        let documents = pipeline.build_documents().await.unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].title, "Hi");
        assert_eq!(
            documents[0].markdown,
            "---\ntitle: Hi\n---\n\nWorld\n\n"
        );
    }

    #[tokio::test]
    async fn listing_failure_fails_the_build_when_configured() {
        let repo = ScriptedRepo {
            records: Mutex::new(vec![Err(AppError::MalformedResponse("boom".into()))]),
            children: Mutex::new(HashMap::new()),
        };
        let config = SourceConfig {
            fail_on_incomplete: true,
            ..SourceConfig::default()
        };

        let result = SourcePipeline::new(repo, config).build_documents().await;
        assert!(matches!(result, Err(AppError::IncompleteContent { .. })));
    }

    #[tokio::test]
    async fn listing_failure_degrades_to_empty_build_by_default() {
        let repo = ScriptedRepo {
            records: Mutex::new(vec![Err(AppError::MalformedResponse("boom".into()))]),
            children: Mutex::new(HashMap::new()),
        };

        let documents = SourcePipeline::new(repo, SourceConfig::default())
            .build_documents()
            .await
            .unwrap();
        assert!(documents.is_empty());
    }
}
