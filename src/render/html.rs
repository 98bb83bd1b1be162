//! HTML rendering for analyses.
//!
//! Output uses the class vocabulary of the product recommendation front end:
//! `analysis-section` / `analysis-heading` for section headers,
//! `recommendation-item` for product picks, `analysis-item` for bullets,
//! `analysis-numbered` for numbered lines and `analysis-text` for prose.

use crate::model::{Analysis, Block, InlineSpan, InlineText};

use super::visitor::{visit_block, BlockVisitor, DefaultVisitor, VisitorAction};
use super::{BlockStats, RenderOptions, RenderResult};

/// Convert an analysis to HTML.
pub fn to_html(analysis: &Analysis, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(analysis)
}

/// Convert an analysis to HTML with statistics.
pub fn to_html_with_stats(analysis: &Analysis, options: &RenderOptions) -> RenderResult {
    let options = options.clone().with_stats(true);
    HtmlRenderer::new(options).render_with_stats(analysis)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    visitor: Box<dyn BlockVisitor>,
    stats: BlockStats,
    in_list: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            visitor: Box::new(DefaultVisitor),
            stats: BlockStats::new(),
            in_list: false,
        }
    }

    /// Set the visitor consulted before each block.
    pub fn with_visitor<V: BlockVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Box::new(visitor);
        self
    }

    /// Render an analysis to HTML.
    pub fn render(mut self, analysis: &Analysis) -> String {
        self.render_internal(analysis)
    }

    /// Render an analysis to HTML with block statistics.
    pub fn render_with_stats(mut self, analysis: &Analysis) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(analysis);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, analysis: &Analysis) -> String {
        let mut output = String::new();

        if self.options.wrap_container {
            output.push_str("<div class=\"analysis-content\">\n");
        }

        for block in analysis {
            match visit_block(self.visitor.as_mut(), block) {
                VisitorAction::Continue => {
                    if self.options.collect_stats {
                        self.stats.add_block(block);
                    }
                    self.render_block(&mut output, block);
                }
                VisitorAction::Replace(replacement) => {
                    if self.options.collect_stats {
                        self.stats.add_block(block);
                    }
                    self.close_list(&mut output);
                    output.push_str(&replacement);
                }
                VisitorAction::Skip => {
                    if self.options.collect_stats {
                        self.stats.add_skipped();
                    }
                }
            }
        }
        self.close_list(&mut output);

        if self.options.wrap_container {
            output.push_str("</div>\n");
        }

        output
    }

    fn render_block(&mut self, output: &mut String, block: &Block) {
        if let Block::BulletItem { content } = block {
            if self.options.group_list_items && !self.in_list {
                output.push_str("<ul class=\"analysis-list\">\n");
                self.in_list = true;
            }
            output.push_str("<li class=\"analysis-item\">");
            render_inline(output, content);
            output.push_str("</li>\n");
            return;
        }

        self.close_list(output);
        match block {
            Block::SectionHeader { title, body } => {
                output.push_str("<div class=\"analysis-section\">\n");
                output.push_str("<h4 class=\"analysis-heading\">");
                render_inline(output, title);
                output.push_str("</h4>\n");
                if let Some(body) = body {
                    output.push_str("<p class=\"analysis-text\">");
                    render_inline(output, body);
                    output.push_str("</p>\n");
                }
                output.push_str("</div>\n");
            }
            Block::RecommendationItem { content } => {
                output.push_str("<div class=\"recommendation-item\"><p>");
                render_inline(output, content);
                output.push_str("</p></div>\n");
            }
            Block::NumberedItem { content } => {
                output.push_str("<p class=\"analysis-numbered\">");
                render_inline(output, content);
                output.push_str("</p>\n");
            }
            Block::Paragraph { content } => {
                output.push_str("<p class=\"analysis-text\">");
                render_inline(output, content);
                output.push_str("</p>\n");
            }
            Block::BulletItem { .. } => {}
        }
    }

    fn close_list(&mut self, output: &mut String) {
        if self.in_list {
            output.push_str("</ul>\n");
            self.in_list = false;
        }
    }
}

fn render_inline(output: &mut String, text: &InlineText) {
    for span in &text.spans {
        match span {
            InlineSpan::Plain { text } => {
                output.push_str(&html_escape::encode_text(text));
            }
            InlineSpan::Emphasis { text } => {
                output.push_str("<strong>");
                output.push_str(&html_escape::encode_text(text));
                output.push_str("</strong>");
            }
        }
    }
}
