// src/api/responses.rs
//! Wire-shape types for Notion API responses and their conversion into
//! the domain model.
//!
//! A missing expected field here is a malformed shape and surfaces as
//! `AppError::MalformedResponse`; optional wire fields get defaults.

use crate::error::AppError;
use crate::model::{
    Block, BlockCommon, BulletedListItemBlock, HeadingBlock, NumberedListItemBlock, OtherBlock,
    ParagraphBlock, PropertyPayload, Record, RecordProperty, TextBlockContent, ToDoBlock,
    ToggleBlock, UnsupportedBlock,
};
use crate::types::{
    Annotations, BlockId, DateMention, LinkTarget, MentionData, RecordId, RichTextItem, SpanKind,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

// --- Rich text ---

#[derive(Debug, Deserialize)]
struct RichTextBody {
    #[serde(rename = "type")]
    kind: String,
    text: Option<TextBody>,
    mention: Option<MentionBody>,
    equation: Option<EquationBody>,
    #[serde(default)]
    annotations: Annotations,
    #[serde(default)]
    plain_text: String,
    href: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextBody {
    #[serde(default)]
    content: String,
    link: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct MentionBody {
    #[serde(rename = "type")]
    kind: String,
    date: Option<DateMention>,
}

#[derive(Debug, Deserialize)]
struct EquationBody {
    expression: String,
}

/// The wire `link` field is usually `{url}` but has historically also
/// appeared as a bare string.
fn link_target(link: Value) -> Option<LinkTarget> {
    match link {
        Value::String(raw) => Some(LinkTarget::Raw(raw)),
        Value::Object(map) => match map.get("url").and_then(Value::as_str) {
            Some(url) => Some(LinkTarget::Structured {
                url: url.to_string(),
            }),
            None => None,
        },
        _ => None,
    }
}

fn span_from_body(body: RichTextBody) -> Result<RichTextItem, AppError> {
    let kind = match body.kind.as_str() {
        "text" => {
            let text = body
                .text
                .ok_or_else(|| AppError::MalformedResponse("text span without text".into()))?;
            SpanKind::Text {
                content: text.content,
                link: text.link.and_then(link_target),
            }
        }
        "equation" => {
            let equation = body.equation.ok_or_else(|| {
                AppError::MalformedResponse("equation span without expression".into())
            })?;
            SpanKind::Equation {
                expression: equation.expression,
            }
        }
        "mention" => {
            let mention = body
                .mention
                .ok_or_else(|| AppError::MalformedResponse("mention span without data".into()))?;
            let data = match mention.kind.as_str() {
                "user" => MentionData::User,
                "page" => MentionData::Page,
                "date" => MentionData::Date(mention.date.ok_or_else(|| {
                    AppError::MalformedResponse("date mention without date".into())
                })?),
                other => MentionData::Other(other.to_string()),
            };
            SpanKind::Mention(data)
        }
        // Unknown span kinds degrade to their plain text.
        _ => SpanKind::Text {
            content: body.plain_text.clone(),
            link: None,
        },
    };

    Ok(RichTextItem {
        kind,
        annotations: body.annotations,
        plain_text: body.plain_text,
        href: body.href,
    })
}

fn rich_text_from_value(value: Option<&Value>) -> Result<Vec<RichTextItem>, AppError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let bodies: Vec<RichTextBody> = serde_json::from_value(value.clone())?;
    bodies.into_iter().map(span_from_body).collect()
}

// --- Records ---

#[derive(Debug, Deserialize)]
struct PageBody {
    id: RecordId,
    #[serde(default)]
    archived: bool,
    created_time: DateTime<Utc>,
    last_edited_time: DateTime<Utc>,
    #[serde(default)]
    properties: IndexMap<String, PropertyBody>,
}

#[derive(Debug, Deserialize)]
struct PropertyBody {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    property_type: String,
    #[serde(flatten)]
    values: IndexMap<String, Value>,
}

fn property_from_body(body: PropertyBody) -> Result<RecordProperty, AppError> {
    let type_value = body.values.get(&body.property_type);
    let payload = match body.property_type.as_str() {
        "title" => PropertyPayload::Title(rich_text_from_value(type_value)?),
        "rich_text" => PropertyPayload::RichText(rich_text_from_value(type_value)?),
        _ => PropertyPayload::Other {
            property_type: body.property_type,
            value: type_value.cloned().unwrap_or(Value::Null),
        },
    };
    Ok(RecordProperty {
        id: body.id,
        payload,
    })
}

/// Converts one raw record listing item into a domain `Record`.
pub fn record_from_value(value: &Value) -> Result<Record, AppError> {
    let body: PageBody = serde_json::from_value(value.clone())?;
    let properties = body
        .properties
        .into_iter()
        .map(|(key, prop)| Ok((key, property_from_body(prop)?)))
        .collect::<Result<IndexMap<_, _>, AppError>>()?;

    Ok(Record {
        id: body.id,
        archived: body.archived,
        created_time: body.created_time,
        last_edited_time: body.last_edited_time,
        properties,
        blocks: Vec::new(),
        raw: value.clone(),
    })
}

// --- Blocks ---

#[derive(Debug, Deserialize)]
struct BlockBody {
    id: BlockId,
    #[serde(default)]
    has_children: bool,
    #[serde(default)]
    archived: bool,
    #[serde(rename = "type")]
    kind: String,
    #[serde(flatten)]
    values: IndexMap<String, Value>,
}

/// Converts one raw children listing item into a domain `Block`.
pub fn block_from_value(value: &Value) -> Result<Block, AppError> {
    let body: BlockBody = serde_json::from_value(value.clone())?;
    let common = BlockCommon {
        id: body.id,
        has_children: body.has_children,
        archived: body.archived,
        children: Vec::new(),
    };

    let payload = body.values.get(&body.kind);
    let content = || -> Result<TextBlockContent, AppError> {
        Ok(TextBlockContent::new(rich_text_from_value(
            payload.and_then(|p| p.get("rich_text")),
        )?))
    };

    let block = match body.kind.as_str() {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            common,
            content: content()?,
        }),
        "heading_1" | "heading_2" | "heading_3" => {
            let level = body.kind.as_bytes()[8] - b'0';
            Block::Heading(HeadingBlock {
                common,
                level,
                content: content()?,
            })
        }
        "to_do" => Block::ToDo(ToDoBlock {
            checked: payload
                .and_then(|p| p.get("checked"))
                .and_then(Value::as_bool)
                .unwrap_or(false),
            content: content()?,
            common,
        }),
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
            common,
            content: content()?,
        }),
        "numbered_list_item" => Block::NumberedListItem(NumberedListItemBlock {
            common,
            content: content()?,
        }),
        "toggle" => Block::Toggle(ToggleBlock {
            common,
            content: content()?,
        }),
        "unsupported" => Block::Unsupported(UnsupportedBlock {
            common,
            kind: body.kind,
        }),
        _ => Block::Other(OtherBlock {
            common,
            kind: body.kind,
        }),
    };

    Ok(block)
}
