// src/model/mod.rs
//! Domain model: records, blocks, and property values.

mod block;
mod common;
mod properties;
mod record;

pub use block::{
    Block, BulletedListItemBlock, HeadingBlock, NumberedListItemBlock, OtherBlock, ParagraphBlock,
    TextBlockContent, ToDoBlock, ToggleBlock, UnsupportedBlock,
};
pub use common::BlockCommon;
pub use properties::{NormalizedProperty, PropertyContent, PropertyPayload, RecordProperty};
pub use record::Record;
