//! Block assembly from classified lines.

use super::classifier::LineClassifier;
use crate::model::{Block, Line};

/// Assembles classified lines into the ordered block sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockBuilder {
    classifier: LineClassifier,
}

impl BlockBuilder {
    /// Create a new block builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build blocks from positioned lines, dropping skipped lines.
    pub fn build(&self, lines: &[Line<'_>]) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(lines.len());
        let mut skipped = 0usize;

        for line in lines {
            match self.classifier.classify_line(line).1 {
                Some(classified) => blocks.push(classified.into_block()),
                None => skipped += 1,
            }
        }

        log::debug!(
            "built {} block(s) from {} line(s), {} skipped",
            blocks.len(),
            lines.len(),
            skipped
        );
        blocks
    }

    /// Lazily build blocks from cleaned text.
    pub fn blocks<'a>(&self, cleaned: &'a str) -> Blocks<'a> {
        Blocks {
            classifier: self.classifier,
            lines: cleaned.lines().enumerate(),
        }
    }
}

/// Lazy iterator over the blocks of cleaned text.
///
/// Cloning the iterator restarts from the clone point; the sequence is the
/// same every time it is walked.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    classifier: LineClassifier,
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Self::Item> {
        for (position, text) in self.lines.by_ref() {
            let line = Line::new(position, text);
            if let (_, Some(classified)) = self.classifier.classify_line(&line) {
                return Some(classified.into_block());
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.lines.size_hint().1)
    }
}

impl std::iter::FusedIterator for Blocks<'_> {}

/// Build blocks from positioned lines.
pub fn build(lines: &[Line<'_>]) -> Vec<Block> {
    BlockBuilder::new().build(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InlineSpan;

    #[test]
    fn test_build_drops_skipped_lines() {
        let lines = Line::split("First\n\n[1, 2]\n```\nLast");
        let blocks = build(&lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].plain_text(), "First");
        assert_eq!(blocks[1].plain_text(), "Last");
    }

    #[test]
    fn test_build_formats_every_field() {
        let lines = Line::split("1. **Pick:** Go with **Phone X**");
        let blocks = build(&lines);
        match &blocks[0] {
            Block::SectionHeader { title, body } => {
                assert_eq!(title.spans, vec![InlineSpan::plain("Pick")]);
                let body = body.as_ref().expect("body present");
                assert_eq!(body.raw, "Go with **Phone X**");
                assert_eq!(
                    body.spans,
                    vec![InlineSpan::plain("Go with "), InlineSpan::emphasis("Phone X")]
                );
            }
            other => panic!("expected section header, got {:?}", other),
        }
    }

    #[test]
    fn test_build_empty() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn test_lazy_blocks_match_build() {
        let text = "1. **A:** x\n\n* **B** y\n- c\n2. d\nplain";
        let builder = BlockBuilder::new();
        let eager = builder.build(&Line::split(text));
        let lazy: Vec<_> = builder.blocks(text).collect();
        assert_eq!(eager, lazy);
    }

    #[test]
    fn test_lazy_blocks_restartable() {
        let builder = BlockBuilder::new();
        let mut blocks = builder.blocks("a\nb\nc");
        blocks.next();
        let replay = blocks.clone();
        assert_eq!(blocks.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = "1. **Summary:** ok\n* **X** y\nmore";
        let lines = Line::split(text);
        assert_eq!(build(&lines), build(&lines));
    }
}
