//! Rendering result with statistics.

use crate::model::{Analysis, Block};
use serde::{Deserialize, Serialize};

/// Result of rendering an analysis, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Block statistics
    pub stats: BlockStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: BlockStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: BlockStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics over the blocks of an analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStats {
    /// Number of section headers
    pub section_count: u32,

    /// Number of recommendation items
    pub recommendation_count: u32,

    /// Number of bullet items
    pub bullet_count: u32,

    /// Number of numbered items
    pub numbered_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of emphasis spans across all fields
    pub emphasis_count: u32,

    /// Blocks a visitor chose to skip
    pub skipped_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl BlockStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for every block of an analysis.
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let mut stats = Self::new();
        for block in analysis {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::SectionHeader { .. } => self.section_count += 1,
            Block::RecommendationItem { .. } => self.recommendation_count += 1,
            Block::BulletItem { .. } => self.bullet_count += 1,
            Block::NumberedItem { .. } => self.numbered_count += 1,
            Block::Paragraph { .. } => self.paragraph_count += 1,
        }
        for text in block.texts() {
            self.emphasis_count += text.emphasis_count() as u32;
        }
        self.count_text(&block.plain_text());
    }

    /// Count a block skipped by a visitor.
    pub fn add_skipped(&mut self) {
        self.skipped_count += 1;
    }

    /// Total number of counted blocks.
    pub fn block_count(&self) -> u32 {
        self.section_count
            + self.recommendation_count
            + self.bullet_count
            + self.numbered_count
            + self.paragraph_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &BlockStats) {
        self.section_count += other.section_count;
        self.recommendation_count += other.recommendation_count;
        self.bullet_count += other.bullet_count;
        self.numbered_count += other.numbered_count;
        self.paragraph_count += other.paragraph_count;
        self.emphasis_count += other.emphasis_count;
        self.skipped_count += other.skipped_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
