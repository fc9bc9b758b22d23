// src/model/common.rs
use super::Block;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// Fields shared by every block kind.
///
/// `children` starts empty and is populated exactly once by the fetch
/// phase; it is never reordered afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockCommon {
    pub id: BlockId,
    pub has_children: bool,
    pub archived: bool,
    pub children: Vec<Block>,
}

impl BlockCommon {
    pub fn new(id: BlockId) -> Self {
        Self {
            id,
            has_children: false,
            archived: false,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }
}

impl Default for BlockCommon {
    fn default() -> Self {
        Self::new(BlockId::new_v4())
    }
}
