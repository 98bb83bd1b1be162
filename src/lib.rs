//! # unprose
//!
//! Structured block extraction from model-generated analysis text.
//!
//! Language models asked for a product analysis answer with loosely
//! structured Markdown: numbered bold headings, bold product bullets, plain
//! bullets, prose, and stray machine-readable fragments (fenced JSON, literal
//! `[1, 2, 3]` arrays). This library turns that text into an ordered list of
//! typed [`Block`]s whose fields are split into plain and emphasis spans.
//!
//! ## Quick Start
//!
//! ```
//! use unprose::{parse, Block};
//!
//! let analysis = parse("1. **Summary:** Good value.\n* **Phone X** is great.");
//!
//! assert_eq!(analysis.len(), 2);
//! assert!(matches!(analysis.blocks[0], Block::SectionHeader { .. }));
//! assert!(matches!(analysis.blocks[1], Block::RecommendationItem { .. }));
//! ```
//!
//! ## Pipeline
//!
//! - **Cleaner**: strips fenced JSON, a trailing `**JSON**` section and
//!   numeric arrays, collapses blank-line runs
//! - **LineClassifier**: ordered rules decide each line's block kind
//! - **format_inline**: splits `**emphasis**` spans
//! - **BlockBuilder**: assembles blocks in line order
//!
//! Every stage is a pure function; nothing fails on malformed input.

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_input, InputKind};
pub use error::{Error, Result};
pub use model::{
    Analysis, Block, InlineSpan, InlineText, Line, Product, RatingValue, RecommendationResponse,
};
pub use parser::{
    build, classify, clean, format_inline, BlockBuilder, Blocks, Classified, Cleaner,
    CleanupOptions, CleanupPreset, LineClassifier, ParseOptions, Rule,
};
pub use render::{BlockStats, JsonFormat, RenderOptions, RenderResult};

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Parse analysis text into blocks with the standard cleanup.
///
/// # Example
///
/// ```
/// use unprose::parse;
///
/// let analysis = parse("Good pick.\n```json\n[1,2,3]\n```\nMore text");
/// assert_eq!(analysis.plain_text(), "Good pick.\nMore text");
/// ```
pub fn parse(raw: &str) -> Analysis {
    parse_with_options(raw, &ParseOptions::default())
}

/// Parse analysis text with custom options.
///
/// # Example
///
/// ```
/// use unprose::{parse_with_options, CleanupPreset, ParseOptions};
///
/// let options = ParseOptions::new().with_cleanup_preset(CleanupPreset::Aggressive);
/// let analysis = parse_with_options("● one\n● two", &options);
/// assert_eq!(analysis.len(), 2);
/// ```
pub fn parse_with_options(raw: &str, options: &ParseOptions) -> Analysis {
    let cleaned = Cleaner::new(options.cleanup.clone()).process(raw);
    let lines = Line::split(&cleaned);
    Analysis::from_blocks(BlockBuilder::new().build(&lines))
}

/// Parse many analysis texts, keeping input order.
///
/// Uses all cores unless `options.parallel` is off.
pub fn parse_batch<S>(inputs: &[S], options: &ParseOptions) -> Vec<Analysis>
where
    S: AsRef<str> + Sync,
{
    log::debug!(
        "parsing {} analyses ({})",
        inputs.len(),
        if options.parallel {
            "parallel"
        } else {
            "sequential"
        }
    );

    if options.parallel {
        inputs
            .par_iter()
            .map(|input| parse_with_options(input.as_ref(), options))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| parse_with_options(input.as_ref(), options))
            .collect()
    }
}

/// Parse a file containing analysis text or a recommendation response.
///
/// # Example
///
/// ```no_run
/// use unprose::parse_file;
///
/// let analysis = parse_file("analysis.txt").unwrap();
/// println!("Blocks: {}", analysis.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Analysis> {
    parse_file_with_options(path, &ParseOptions::default())
}

/// Parse a file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Analysis> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_input(&text, options)
}

/// Parse analysis text or a recommendation response from a reader.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Analysis> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    parse_input(&text, &ParseOptions::default())
}

/// Parse input of either kind, detected with [`detect_input`].
pub fn parse_input(text: &str, options: &ParseOptions) -> Result<Analysis> {
    match detect_input(text) {
        InputKind::Analysis => Ok(parse_with_options(text, options)),
        InputKind::Response => {
            let response = parse_response_json(text)?;
            Ok(parse_with_options(&response.ai_analysis, options))
        }
    }
}

/// Decode a recommendation response document.
///
/// # Example
///
/// ```
/// use unprose::parse_response_json;
///
/// let response = parse_response_json(r#"{"ai_analysis": "- cheap"}"#).unwrap();
/// assert_eq!(response.analysis().len(), 1);
/// ```
pub fn parse_response_json(json: &str) -> Result<RecommendationResponse> {
    serde_json::from_str(json).map_err(|e| Error::InvalidResponse(e.to_string()))
}

/// Builder for parsing and rendering analyses.
///
/// # Example
///
/// ```
/// use unprose::{CleanupPreset, Unprose};
///
/// let html = Unprose::new()
///     .with_cleanup(CleanupPreset::Standard)
///     .with_container()
///     .parse("* **Phone X** is great.")
///     .to_html();
/// assert!(html.contains("recommendation-item"));
/// ```
pub struct Unprose {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Unprose {
    /// Create a new Unprose builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.parse_options = self.parse_options.with_cleanup_preset(preset);
        self
    }

    /// Disable parallel processing for batches.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Set the list marker for text output.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Wrap HTML output in a container element.
    pub fn with_container(mut self) -> Self {
        self.render_options = self.render_options.with_container(true);
        self
    }

    /// Parse analysis text.
    pub fn parse(&self, raw: &str) -> UnproseResult {
        UnproseResult {
            analysis: parse_with_options(raw, &self.parse_options),
            render_options: self.render_options.clone(),
        }
    }

    /// Parse a file holding analysis text or a response document.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<UnproseResult> {
        let analysis = parse_file_with_options(path, &self.parse_options)?;
        Ok(UnproseResult {
            analysis,
            render_options: self.render_options.clone(),
        })
    }

    /// Parse many texts.
    pub fn parse_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<UnproseResult> {
        parse_batch(inputs, &self.parse_options)
            .into_iter()
            .map(|analysis| UnproseResult {
                analysis,
                render_options: self.render_options.clone(),
            })
            .collect()
    }
}

impl Default for Unprose {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an analysis.
pub struct UnproseResult {
    /// The parsed analysis
    pub analysis: Analysis,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnproseResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.analysis, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.analysis, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.analysis, format)
    }

    /// Block statistics.
    pub fn stats(&self) -> BlockStats {
        BlockStats::from_analysis(&self.analysis)
    }

    /// Get the analysis.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprose_builder() {
        let unprose = Unprose::new()
            .with_cleanup(CleanupPreset::Aggressive)
            .with_container()
            .sequential();

        assert!(unprose.parse_options.cleanup.normalize_unicode);
        assert!(!unprose.parse_options.parallel);
        assert!(unprose.render_options.wrap_container);
    }

    #[test]
    fn test_unprose_builder_default() {
        let builder = Unprose::default();
        assert_eq!(builder.parse_options, ParseOptions::default());
        assert!(!builder.render_options.wrap_container);
    }

    #[test]
    fn test_unprose_result_outputs() {
        let result = Unprose::new()
            .with_list_marker('-')
            .parse("- cheap\nplain");

        assert_eq!(result.to_text(), "- cheap\nplain");
        assert!(result.to_html().contains("<li class=\"analysis-item\">cheap</li>"));
        assert!(result.to_json(JsonFormat::Compact).unwrap().contains("bullet_item"));
        assert_eq!(result.stats().block_count(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("  \n\t\n  ").is_empty());
    }

    #[test]
    fn test_parse_input_response() {
        let json = r#"{"products": [], "ai_analysis": "1. **Summary:** ok", "recommended_products": []}"#;
        let analysis = parse_input(json, &ParseOptions::default()).unwrap();
        assert_eq!(analysis.section_titles(), vec!["Summary".to_string()]);
    }

    #[test]
    fn test_parse_response_json_invalid() {
        let result = parse_response_json(r#"{"products": []}"#);
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_parse_reader_invalid_utf8() {
        let result = parse_reader(&[0xFF, 0xFE, 0x00][..]);
        assert!(matches!(result, Err(Error::Encoding(_))));
    }

    #[test]
    fn test_parse_reader_text() {
        let analysis = parse_reader("- a\n- b".as_bytes()).unwrap();
        assert_eq!(analysis.len(), 2);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/nonexistent/analysis.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_batch_keeps_order() {
        let inputs = vec!["- a", "plain", "1. **T:** x"];
        let parallel = parse_batch(&inputs, &ParseOptions::default());
        let sequential = parse_batch(&inputs, &ParseOptions::new().sequential());

        assert_eq!(parallel, sequential);
        assert!(matches!(parallel[0].blocks[0], Block::BulletItem { .. }));
        assert!(matches!(parallel[2].blocks[0], Block::SectionHeader { .. }));
    }
}
