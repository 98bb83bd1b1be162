//! Line classification by ordered pattern rules.
//!
//! Each non-empty line is tested against [`RULES`] top to bottom and the
//! first rule that matches decides the block kind. Section headers and
//! recommendation items are strict subsets of the numbered, bullet and
//! paragraph shapes, so the specific rules come first: a numbered heading
//! must not fall through to a plain numbered item, nor a bold bullet to a
//! plain bullet.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::format_inline;
use crate::model::{Block, InlineText, Line};

static BRACKETED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[.*\]\s*$").expect("valid bracketed line regex"));

static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\s*\*\*([^*]+):\*\*\s*(.*)").expect("valid section header regex")
});

static RECOMMENDATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\s*\*\*[^*]+\*\*").expect("valid recommendation regex"));

static RECOMMENDATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*\s*").expect("valid recommendation marker regex"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*\-•]\s+").expect("valid bullet regex"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("valid numbered regex"));

/// Code fence marker.
const FENCE: &str = "```";

/// Name of the structured-data format treated as noise.
const STRUCTURED_FORMAT: &str = "json";

/// A named classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Blank lines and residual structured-data noise
    Skip,
    /// `N. **Label:** body`
    SectionHeader,
    /// `* **Name** ...`
    RecommendationItem,
    /// `* item`, `- item`, `• item`
    BulletItem,
    /// `N. item`
    NumberedItem,
    /// Anything else
    Paragraph,
}

/// Rules in evaluation order.
pub const RULES: [Rule; 6] = [
    Rule::Skip,
    Rule::SectionHeader,
    Rule::RecommendationItem,
    Rule::BulletItem,
    Rule::NumberedItem,
    Rule::Paragraph,
];

impl Rule {
    /// Human-readable rule name.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Skip => "skip",
            Rule::SectionHeader => "section_header",
            Rule::RecommendationItem => "recommendation_item",
            Rule::BulletItem => "bullet_item",
            Rule::NumberedItem => "numbered_item",
            Rule::Paragraph => "paragraph",
        }
    }

    /// Try this rule against a line.
    ///
    /// Returns `None` if the rule does not apply, `Some(None)` if it applies
    /// and drops the line, `Some(Some(_))` if it applies and captures a block.
    pub fn apply<'a>(&self, line: &'a str) -> Option<Option<Classified<'a>>> {
        match self {
            Rule::Skip => is_noise(line).then_some(None),
            Rule::SectionHeader => SECTION_HEADER.captures(line).map(|caps| {
                let title = caps.get(1).map_or("", |m| m.as_str());
                let body = caps.get(2).map_or("", |m| m.as_str()).trim_end();
                Some(Classified::SectionHeader {
                    title,
                    body: (!body.is_empty()).then_some(body),
                })
            }),
            Rule::RecommendationItem => RECOMMENDATION.is_match(line).then(|| {
                let marker_end = RECOMMENDATION_MARKER.find(line).map_or(0, |m| m.end());
                Some(Classified::RecommendationItem {
                    content: &line[marker_end..],
                })
            }),
            Rule::BulletItem => BULLET.find(line).map(|m| {
                Some(Classified::BulletItem {
                    content: &line[m.end()..],
                })
            }),
            Rule::NumberedItem => NUMBERED.find(line).map(|m| {
                Some(Classified::NumberedItem {
                    content: &line[m.end()..],
                })
            }),
            Rule::Paragraph => Some(Some(Classified::Paragraph { content: line })),
        }
    }
}

fn is_noise(line: &str) -> bool {
    line.trim().is_empty()
        || line.contains(FENCE)
        || BRACKETED_LINE.is_match(line)
        || line.to_lowercase().contains(STRUCTURED_FORMAT)
}

/// A classified line before inline formatting; payloads borrow the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified<'a> {
    /// Section header capture
    SectionHeader {
        /// Label without the colon
        title: &'a str,
        /// Trailing text, absent when empty
        body: Option<&'a str>,
    },
    /// Recommendation item capture
    RecommendationItem {
        /// Line with the bullet marker stripped
        content: &'a str,
    },
    /// Bullet item capture
    BulletItem {
        /// Text after the marker
        content: &'a str,
    },
    /// Numbered item capture
    NumberedItem {
        /// Text after the numbering
        content: &'a str,
    },
    /// Paragraph capture
    Paragraph {
        /// The full line
        content: &'a str,
    },
}

impl Classified<'_> {
    /// Run the inline formatter over every captured field.
    pub fn into_block(self) -> Block {
        match self {
            Classified::SectionHeader { title, body } => Block::SectionHeader {
                title: inline_text(title),
                body: body.map(inline_text),
            },
            Classified::RecommendationItem { content } => Block::RecommendationItem {
                content: inline_text(content),
            },
            Classified::BulletItem { content } => Block::BulletItem {
                content: inline_text(content),
            },
            Classified::NumberedItem { content } => Block::NumberedItem {
                content: inline_text(content),
            },
            Classified::Paragraph { content } => Block::Paragraph {
                content: inline_text(content),
            },
        }
    }
}

fn inline_text(raw: &str) -> InlineText {
    InlineText::new(raw, format_inline(raw))
}

/// Assigns block kinds to lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify one line, reporting the rule that fired.
    pub fn classify_line<'a>(&self, line: &Line<'a>) -> (Rule, Option<Classified<'a>>) {
        let (rule, outcome) = RULES
            .iter()
            .find_map(|rule| rule.apply(line.text).map(|outcome| (*rule, outcome)))
            .unwrap_or((
                Rule::Paragraph,
                Some(Classified::Paragraph { content: line.text }),
            ));
        log::trace!("line {}: {}", line.position, rule.name());
        (rule, outcome)
    }

    /// Classify every line of cleaned text, one entry per line.
    pub fn classify<'a>(&self, cleaned: &'a str) -> Vec<Option<Classified<'a>>> {
        Line::split(cleaned)
            .iter()
            .map(|line| self.classify_line(line).1)
            .collect()
    }
}

/// Classify every line of cleaned text, one entry per line.
pub fn classify(cleaned: &str) -> Vec<Option<Classified<'_>>> {
    LineClassifier::new().classify(cleaned)
}
