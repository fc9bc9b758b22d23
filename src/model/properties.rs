// src/model/properties.rs
//! Record property values as fetched and as normalized.

use crate::types::RichTextItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The type-specific value of one record property as fetched.
///
/// Title and rich-text payloads are spanned text and get dedicated
/// variants because the normalizer treats them specially; everything
/// else passes through as its raw JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyPayload {
    Title(Vec<RichTextItem>),
    RichText(Vec<RichTextItem>),
    Other { property_type: String, value: Value },
}

impl PropertyPayload {
    /// The wire-facing type tag.
    pub fn type_tag(&self) -> &str {
        match self {
            PropertyPayload::Title(_) => "title",
            PropertyPayload::RichText(_) => "rich_text",
            PropertyPayload::Other { property_type, .. } => property_type,
        }
    }
}

/// One entry of a record's typed property map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordProperty {
    pub id: String,
    pub payload: PropertyPayload,
}

/// A property value after normalization: rich text flattened to a
/// string, everything else kept raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyContent {
    Text(String),
    Raw(Value),
}

impl PropertyContent {
    /// The value to place in front matter: for object values carrying a
    /// `remote_image` sub-field, that sub-field substitutes for the raw
    /// value.
    pub fn front_matter_value(&self) -> Value {
        match self {
            PropertyContent::Text(text) => Value::String(text.clone()),
            PropertyContent::Raw(value) => value
                .get("remote_image")
                .cloned()
                .unwrap_or_else(|| value.clone()),
        }
    }
}

/// One entry of the normalized property map handed to the document
/// assembler. The title property never appears here; it is surfaced
/// separately as the record's title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProperty {
    pub id: String,
    pub key: String,
    pub value: PropertyContent,
    pub property_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn front_matter_value_substitutes_remote_image() {
        let with_image = PropertyContent::Raw(json!({
            "remote_image": "https://cdn.example.com/a.png",
            "url": "https://files.notion.so/a.png"
        }));
        assert_eq!(
            with_image.front_matter_value(),
            json!("https://cdn.example.com/a.png")
        );

        let plain = PropertyContent::Raw(json!({"number": 3}));
        assert_eq!(plain.front_matter_value(), json!({"number": 3}));
    }
}
