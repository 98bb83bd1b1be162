//! Analysis-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// The ordered blocks produced from one analysis text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Blocks in source line order
    pub blocks: Vec<Block>,
}

impl Analysis {
    /// Create a new empty analysis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analysis from already built blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the analysis has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Get the section headers' titles, in order.
    pub fn section_titles(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::SectionHeader { title, .. } => Some(title.plain_text()),
                _ => None,
            })
            .collect()
    }

    /// Get the recommendation items, in order.
    pub fn recommendations(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block, Block::RecommendationItem { .. }))
    }

    /// Count blocks of one kind (`"section_header"`, `"bullet_item"`, ...).
    pub fn count_kind(&self, kind: &str) -> usize {
        self.blocks.iter().filter(|block| block.kind() == kind).count()
    }

    /// Get plain text content of the whole analysis, one block per line.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Analysis {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl IntoIterator for Analysis {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}
