// src/output.rs
//! Writes assembled documents to the output directory.
//!
//! Stands in for the host build system's node registration: one file
//! per document, named by the namespaced node identifier.

use crate::document::DocumentNode;
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of writing a document batch.
#[derive(Debug, Default)]
pub struct OutputReport {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

/// Writes every document under `out_dir`, continuing past individual
/// write failures.
pub fn write_documents(documents: &[DocumentNode], out_dir: &Path) -> Result<OutputReport, AppError> {
    fs::create_dir_all(out_dir)?;

    let mut report = OutputReport::default();
    for document in documents {
        let path = out_dir.join(format!("{}.md", document.id));
        match fs::write(&path, &document.markdown) {
            Ok(()) => {
                log::debug!("Wrote {} ({} bytes)", path.display(), document.markdown.len());
                report.written.push(path);
            }
            Err(err) => {
                log::error!("Failed to write {}: {}", path.display(), err);
                report.failed += 1;
            }
        }
    }

    log::info!(
        "Wrote {} documents, {} failed",
        report.written.len(),
        report.failed
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourceConfig;
    use crate::document::assemble_document;
    use crate::model::{PropertyPayload, Record, RecordProperty};
    use crate::types::{RecordId, RichTextItem};
    use chrono::Utc;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn document(title: &str) -> DocumentNode {
        let mut properties = IndexMap::new();
        properties.insert(
            "Name".to_string(),
            RecordProperty {
                id: "title".to_string(),
                payload: PropertyPayload::Title(vec![RichTextItem::plain(title)]),
            },
        );
        let record = Record {
            id: RecordId::new_v4(),
            archived: false,
            created_time: Utc::now(),
            last_edited_time: Utc::now(),
            properties,
            blocks: Vec::new(),
            raw: serde_json::Value::Null,
        };
        assemble_document(&record, &SourceConfig::default()).unwrap()
    }

    #[test]
    fn writes_one_file_per_document() {
        let dir = tempfile::tempdir().unwrap();
        let docs = vec![document("One"), document("Two")];

        let report = write_documents(&docs, dir.path()).unwrap();
        assert_eq!(report.written.len(), 2);
        assert_eq!(report.failed, 0);

        let content = fs::read_to_string(&report.written[0]).unwrap();
        assert_eq!(content, "---\ntitle: One\n---\n\n");
    }
}
