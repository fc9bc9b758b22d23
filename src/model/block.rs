// src/model/block.rs
//! The closed block vocabulary.
//!
//! The remote API drives behavior off a free-form `type` string; here
//! that dispatch is a tagged union over the kinds the emitter knows,
//! with an explicit `Other` arm so unknown remote types are skipped as
//! a deliberate, named variant rather than a fallthrough.

use super::common::BlockCommon;
use crate::types::{BlockId, RichTextItem};
use serde::{Deserialize, Serialize};

/// Reduce boilerplate for accessors over every variant.
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Unsupported($pattern) => $result,
            Block::Other($pattern) => $result,
        }
    };
}

/// Inline text carried by text-bearing block kinds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
}

impl TextBlockContent {
    pub fn new(rich_text: Vec<RichTextItem>) -> Self {
        Self { rich_text }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingBlock {
    pub common: BlockCommon,
    /// 1-based heading level as reported by the API (`heading_1`..).
    pub level: u8,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub checked: bool,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedListItemBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleBlock {
    pub common: BlockCommon,
    pub content: TextBlockContent,
}

/// A block the API itself reports as unsupported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub kind: String,
}

/// A block kind the emitter has no rule for. It contributes nothing to
/// the output but still carries children so the tree stays complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherBlock {
    pub common: BlockCommon,
    pub kind: String,
}

/// One node of a record's content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Heading(HeadingBlock),
    ToDo(ToDoBlock),
    BulletedListItem(BulletedListItemBlock),
    NumberedListItem(NumberedListItemBlock),
    Toggle(ToggleBlock),
    Unsupported(UnsupportedBlock),
    Other(OtherBlock),
}

impl Block {
    pub fn id(&self) -> &BlockId {
        match_all_blocks!(self, b => &b.common.id)
    }

    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match_all_blocks!(self, b => &mut b.common)
    }

    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    pub fn children(&self) -> &[Block] {
        &self.common().children
    }

    pub fn set_children(&mut self, children: Vec<Block>) {
        self.common_mut().children = children;
    }

    /// The wire-facing type tag.
    pub fn kind(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading(b) => match b.level {
                1 => "heading_1",
                2 => "heading_2",
                _ => "heading_3",
            },
            Block::ToDo(_) => "to_do",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::Toggle(_) => "toggle",
            Block::Unsupported(b) => &b.kind,
            Block::Other(b) => &b.kind,
        }
    }
}
