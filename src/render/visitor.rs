//! Visitor pattern for customizing block rendering.
//!
//! The visitor pattern allows users to customize how different block kinds
//! are rendered without modifying the core rendering logic.
//!
//! # Example
//!
//! ```
//! use unprose::render::visitor::{BlockVisitor, VisitorAction};
//! use unprose::model::InlineText;
//!
//! struct PlainRecommendations;
//!
//! impl BlockVisitor for PlainRecommendations {
//!     fn visit_recommendation(&mut self, content: &InlineText) -> VisitorAction {
//!         VisitorAction::Replace(format!("<p>{}</p>\n", content.plain_text()))
//!     }
//! }
//! ```

use crate::model::{Block, InlineText};

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the block with custom output.
    Replace(String),

    /// Skip this block entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the block should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting blocks during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait BlockVisitor: Send + Sync {
    /// Called before rendering a section header.
    fn visit_section_header(
        &mut self,
        title: &InlineText,
        body: Option<&InlineText>,
    ) -> VisitorAction {
        let _ = (title, body);
        VisitorAction::Continue
    }

    /// Called before rendering a recommendation item.
    fn visit_recommendation(&mut self, content: &InlineText) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }

    /// Called before rendering a bullet item.
    fn visit_bullet(&mut self, content: &InlineText) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }

    /// Called before rendering a numbered item.
    fn visit_numbered(&mut self, content: &InlineText) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }

    /// Called before rendering a paragraph.
    fn visit_paragraph(&mut self, content: &InlineText) -> VisitorAction {
        let _ = content;
        VisitorAction::Continue
    }
}

/// Dispatch a block to the matching visitor method.
pub fn visit_block(visitor: &mut dyn BlockVisitor, block: &Block) -> VisitorAction {
    match block {
        Block::SectionHeader { title, body } => visitor.visit_section_header(title, body.as_ref()),
        Block::RecommendationItem { content } => visitor.visit_recommendation(content),
        Block::BulletItem { content } => visitor.visit_bullet(content),
        Block::NumberedItem { content } => visitor.visit_numbered(content),
        Block::Paragraph { content } => visitor.visit_paragraph(content),
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl BlockVisitor for DefaultVisitor {}

/// Visitor that drops free-standing paragraphs, keeping only structure.
#[derive(Debug, Clone, Default)]
pub struct SkipParagraphsVisitor;

impl BlockVisitor for SkipParagraphsVisitor {
    fn visit_paragraph(&mut self, _content: &InlineText) -> VisitorAction {
        VisitorAction::Skip
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn BlockVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: BlockVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }

    fn first_action(
        &mut self,
        mut visit: impl FnMut(&mut dyn BlockVisitor) -> VisitorAction,
    ) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visit(visitor.as_mut());
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockVisitor for CompositeVisitor {
    fn visit_section_header(
        &mut self,
        title: &InlineText,
        body: Option<&InlineText>,
    ) -> VisitorAction {
        self.first_action(|v| v.visit_section_header(title, body))
    }

    fn visit_recommendation(&mut self, content: &InlineText) -> VisitorAction {
        self.first_action(|v| v.visit_recommendation(content))
    }

    fn visit_bullet(&mut self, content: &InlineText) -> VisitorAction {
        self.first_action(|v| v.visit_bullet(content))
    }

    fn visit_numbered(&mut self, content: &InlineText) -> VisitorAction {
        self.first_action(|v| v.visit_numbered(content))
    }

    fn visit_paragraph(&mut self, content: &InlineText) -> VisitorAction {
        self.first_action(|v| v.visit_paragraph(content))
    }
}
