// src/model/record.rs
//! The top-level content record.

use super::properties::{PropertyPayload, RecordProperty};
use super::Block;
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One top-level content item fetched from the remote source.
///
/// Created from one page of the record listing, mutated once to attach
/// its block tree, then consumed by the document assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub archived: bool,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub properties: IndexMap<String, RecordProperty>,
    /// Root of the content tree; empty until the fetch phase attaches it.
    pub blocks: Vec<Block>,
    /// The raw source payload, carried through to the emitted node.
    pub raw: Value,
}

impl Record {
    /// The record's title: the concatenated plain text of its
    /// title-typed property, or empty when none exists.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find_map(|prop| match &prop.payload {
                PropertyPayload::Title(spans) => Some(
                    spans
                        .iter()
                        .map(|span| span.plain_text.as_str())
                        .collect::<String>(),
                ),
                _ => None,
            })
            .unwrap_or_default()
    }
}
