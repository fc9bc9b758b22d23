// src/document.rs
//! Document assembly: one record becomes one flat text document.
//!
//! The assembled content is either `front matter + body` or the body
//! alone. Front matter is a YAML mapping starting with the title,
//! followed by every normalized property value.

use crate::config::SourceConfig;
use crate::error::AppError;
use crate::model::{NormalizedProperty, Record};
use crate::render::{normalize_properties, render_blocks, RenderOptions};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// The document node handed to the host build system.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentNode {
    /// Node-type label concatenated with the remote identifier;
    /// globally unique within the host's node registry.
    pub id: String,
    pub title: String,
    pub properties: IndexMap<String, NormalizedProperty>,
    pub archived: bool,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    /// The assembled text artifact: optional front matter plus body.
    pub markdown: String,
    pub raw: Value,
    pub raw_json: String,
}

/// Assembles one record into its final document.
pub fn assemble_document(record: &Record, config: &SourceConfig) -> Result<DocumentNode, AppError> {
    let title = record.title();
    let properties = normalize_properties(&record.properties);
    let body = render_blocks(
        &record.blocks,
        &RenderOptions {
            lower_heading_level: config.lower_title_level,
        },
    );

    let markdown = if config.props_to_frontmatter {
        let front_matter = front_matter_mapping(&title, &properties)?;
        format!("---\n{}---\n\n{}", front_matter, body)
    } else {
        body
    };

    Ok(DocumentNode {
        id: format!("{}-{}", config.node_type_label, record.id),
        title,
        properties,
        archived: record.archived,
        created_time: record.created_time,
        last_edited_time: record.last_edited_time,
        markdown,
        raw: record.raw.clone(),
        raw_json: serde_json::to_string(&record.raw)?,
    })
}

/// Serializes `{title, key → value}` as YAML, title first, property
/// order preserved.
fn front_matter_mapping(
    title: &str,
    properties: &IndexMap<String, NormalizedProperty>,
) -> Result<String, AppError> {
    let mut mapping: IndexMap<&str, Value> = IndexMap::new();
    mapping.insert("title", Value::String(title.to_string()));
    for (key, prop) in properties {
        mapping.insert(key, prop.value.front_matter_value());
    }
    Ok(serde_yaml::to_string(&mapping)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Block, BlockCommon, ParagraphBlock, PropertyPayload, RecordProperty, TextBlockContent,
    };
    use crate::types::{RecordId, RichTextItem};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(title: &str, body_text: &str) -> Record {
        let mut properties = IndexMap::new();
        properties.insert(
            "Name".to_string(),
            RecordProperty {
                id: "title".to_string(),
                payload: PropertyPayload::Title(vec![RichTextItem::plain(title)]),
            },
        );
        Record {
            id: RecordId::parse("0123456789abcdef0123456789abcdef").unwrap(),
            archived: false,
            created_time: Utc::now(),
            last_edited_time: Utc::now(),
            properties,
            blocks: vec![Block::Paragraph(ParagraphBlock {
                common: BlockCommon::default(),
                content: TextBlockContent::new(vec![RichTextItem::plain(body_text)]),
            })],
            raw: json!({"object": "page"}),
        }
    }

    #[test]
    fn assembles_front_matter_plus_body() {
        let config = SourceConfig::default();
        let doc = assemble_document(&record("Hi", "World"), &config).unwrap();
        assert_eq!(doc.markdown, "---\ntitle: Hi\n---\n\nWorld\n\n");
        assert_eq!(doc.title, "Hi");
        assert_eq!(doc.id, "Notion-0123456789abcdef0123456789abcdef");
        assert_eq!(doc.raw_json, "{\"object\":\"page\"}");
    }

    #[test]
    fn body_alone_when_front_matter_disabled() {
        let config = SourceConfig {
            props_to_frontmatter: false,
            ..SourceConfig::default()
        };
        let doc = assemble_document(&record("Hi", "World"), &config).unwrap();
        assert_eq!(doc.markdown, "World\n\n");
    }

    #[test]
    fn front_matter_includes_normalized_properties() {
        let mut rec = record("Hi", "World");
        rec.properties.insert(
            "Cover".to_string(),
            RecordProperty {
                id: "cc".to_string(),
                payload: PropertyPayload::Other {
                    property_type: "files".to_string(),
                    value: json!({"remote_image": "https://cdn.example.com/c.png"}),
                },
            },
        );
        let doc = assemble_document(&rec, &SourceConfig::default()).unwrap();
        assert_eq!(
            doc.markdown,
            "---\ntitle: Hi\nCover: https://cdn.example.com/c.png\n---\n\nWorld\n\n"
        );
    }
}
