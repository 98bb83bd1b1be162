//! Inline span types.

use serde::{Deserialize, Serialize};

/// A run of text inside a block field, either plain or emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Unstyled text
    Plain {
        /// The text content
        text: String,
    },

    /// Text that was wrapped in emphasis markers (markers removed)
    Emphasis {
        /// The text content
        text: String,
    },
}

impl InlineSpan {
    /// Create a plain span.
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan::Plain { text: text.into() }
    }

    /// Create an emphasis span.
    pub fn emphasis(text: impl Into<String>) -> Self {
        InlineSpan::Emphasis { text: text.into() }
    }

    /// Get the text of the span, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain { text } | InlineSpan::Emphasis { text } => text,
        }
    }

    /// Check if this span is emphasized.
    pub fn is_emphasis(&self) -> bool {
        matches!(self, InlineSpan::Emphasis { .. })
    }
}

/// A textual block field: the captured source substring plus its spans.
///
/// `raw` keeps the emphasis markers exactly as they appeared in the line;
/// `spans` is what the inline formatter produced from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineText {
    /// Captured substring, markers retained
    pub raw: String,

    /// Formatted spans in encounter order
    pub spans: Vec<InlineSpan>,
}

impl InlineText {
    /// Create inline text from already formatted spans.
    pub fn new(raw: impl Into<String>, spans: Vec<InlineSpan>) -> Self {
        Self {
            raw: raw.into(),
            spans,
        }
    }

    /// Get the text with emphasis markers removed.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(InlineSpan::text).collect()
    }

    /// Check if any span is emphasized.
    pub fn has_emphasis(&self) -> bool {
        self.spans.iter().any(InlineSpan::is_emphasis)
    }

    /// Number of emphasis spans.
    pub fn emphasis_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_emphasis()).count()
    }

    /// Check if there is no visible text.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_text_plain_text() {
        let text = InlineText::new(
            "**Phone X** is great.",
            vec![
                InlineSpan::emphasis("Phone X"),
                InlineSpan::plain(" is great."),
            ],
        );

        assert_eq!(text.plain_text(), "Phone X is great.");
        assert!(text.has_emphasis());
        assert_eq!(text.emphasis_count(), 1);
    }

    #[test]
    fn test_empty_inline_text() {
        let text = InlineText::new("", Vec::new());
        assert!(text.is_empty());
        assert!(!text.has_emphasis());
    }

    #[test]
    fn test_span_serialization() {
        let json = serde_json::to_string(&InlineSpan::emphasis("bold")).unwrap();
        assert_eq!(json, r#"{"type":"emphasis","text":"bold"}"#);
    }
}
