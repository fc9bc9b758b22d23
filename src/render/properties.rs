// src/render/properties.rs
//! Property normalization: the record's typed property map becomes a
//! key → {id, key, value, type} mapping for the document assembler.
//!
//! The title property is excluded (it is surfaced as the record's
//! title), rich-text values are flattened through the inline renderer,
//! and all other values pass through raw. The input map is never
//! mutated; the output key set is the input key set minus the title.

use super::rich_text::render_rich_text;
use crate::model::{NormalizedProperty, PropertyContent, PropertyPayload, RecordProperty};
use indexmap::IndexMap;

/// Normalizes one record property map.
pub fn normalize_properties(
    properties: &IndexMap<String, RecordProperty>,
) -> IndexMap<String, NormalizedProperty> {
    properties
        .iter()
        .filter_map(|(key, prop)| {
            normalize_property(key, prop).map(|normalized| (key.clone(), normalized))
        })
        .collect()
}

fn normalize_property(key: &str, prop: &RecordProperty) -> Option<NormalizedProperty> {
    let (value, property_type) = match &prop.payload {
        PropertyPayload::Title(_) => return None,
        PropertyPayload::RichText(spans) => (
            PropertyContent::Text(render_rich_text(spans)),
            "rich_text".to_string(),
        ),
        PropertyPayload::Other {
            property_type,
            value,
        } => (
            PropertyContent::Raw(value.clone()),
            property_type.clone(),
        ),
    };

    Some(NormalizedProperty {
        id: prop.id.clone(),
        key: key.to_string(),
        value,
        property_type,
    })
}
