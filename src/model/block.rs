//! Line and block types.

use super::InlineText;
use serde::{Deserialize, Serialize};

/// One line of cleaned text and its zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based line index in the cleaned text
    pub position: usize,

    /// Line text without the line break
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Create a new line.
    pub fn new(position: usize, text: &'a str) -> Self {
        Self { position, text }
    }

    /// Split text into positioned lines.
    ///
    /// Splits on `\n` and strips a trailing `\r`, so CRLF input yields the
    /// same lines as LF input.
    pub fn split(text: &'a str) -> Vec<Line<'a>> {
        text.lines()
            .enumerate()
            .map(|(position, text)| Line::new(position, text))
            .collect()
    }

    /// Check if the line has no visible content.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A classified, renderable unit of content derived from a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Numbered, bold-labeled heading (`1. **Label:** body`)
    SectionHeader {
        /// Heading label without the trailing colon
        title: InlineText,
        /// Text following the label on the same line
        body: Option<InlineText>,
    },

    /// Bullet whose content starts with a bold product-style label
    RecommendationItem {
        /// Line content after the bullet marker
        content: InlineText,
    },

    /// Generic bullet line (`*`, `-` or `•`)
    BulletItem {
        /// Line content after the bullet marker
        content: InlineText,
    },

    /// Numbered line without a bold heading label
    NumberedItem {
        /// Line content after the numbering
        content: InlineText,
    },

    /// Any other non-empty line
    Paragraph {
        /// The full line
        content: InlineText,
    },
}

impl Block {
    /// Snake-case name of the block kind, as used in serialized output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::SectionHeader { .. } => "section_header",
            Block::RecommendationItem { .. } => "recommendation_item",
            Block::BulletItem { .. } => "bullet_item",
            Block::NumberedItem { .. } => "numbered_item",
            Block::Paragraph { .. } => "paragraph",
        }
    }

    /// Get the main text field of the block (the title for headers).
    pub fn content(&self) -> &InlineText {
        match self {
            Block::SectionHeader { title, .. } => title,
            Block::RecommendationItem { content }
            | Block::BulletItem { content }
            | Block::NumberedItem { content }
            | Block::Paragraph { content } => content,
        }
    }

    /// Iterate over every textual field of the block.
    pub fn texts(&self) -> impl Iterator<Item = &InlineText> {
        let body = match self {
            Block::SectionHeader { body, .. } => body.as_ref(),
            _ => None,
        };
        std::iter::once(self.content()).chain(body)
    }

    /// Get plain text of the block with markers removed.
    ///
    /// Header title and body are joined with a single space.
    pub fn plain_text(&self) -> String {
        self.texts()
            .map(InlineText::plain_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if this is a section header.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::SectionHeader { .. })
    }

    /// Check if this is any kind of list entry.
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            Block::RecommendationItem { .. } | Block::BulletItem { .. } | Block::NumberedItem { .. }
        )
    }
}
