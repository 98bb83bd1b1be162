//! Integration tests for the visitor pattern.

use unprose::model::InlineText;
use unprose::render::visitor::{
    BlockVisitor, CompositeVisitor, DefaultVisitor, SkipParagraphsVisitor, VisitorAction,
};
use unprose::render::HtmlRenderer;
use unprose::{parse, RenderOptions};

const SAMPLE: &str = "1. **Summary:** Good value.\n\
                      * **Phone X** is great.\n\
                      - cheap\n\
                      - light\n\
                      2. Also consider battery life.\n\
                      Closing thoughts.";

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    section_count: usize,
    recommendation_count: usize,
    bullet_count: usize,
    numbered_count: usize,
    paragraph_count: usize,
}

impl BlockVisitor for CountingVisitor {
    fn visit_section_header(
        &mut self,
        _title: &InlineText,
        _body: Option<&InlineText>,
    ) -> VisitorAction {
        self.section_count += 1;
        VisitorAction::Continue
    }

    fn visit_recommendation(&mut self, _content: &InlineText) -> VisitorAction {
        self.recommendation_count += 1;
        VisitorAction::Continue
    }

    fn visit_bullet(&mut self, _content: &InlineText) -> VisitorAction {
        self.bullet_count += 1;
        VisitorAction::Continue
    }

    fn visit_numbered(&mut self, _content: &InlineText) -> VisitorAction {
        self.numbered_count += 1;
        VisitorAction::Continue
    }

    fn visit_paragraph(&mut self, _content: &InlineText) -> VisitorAction {
        self.paragraph_count += 1;
        VisitorAction::Continue
    }
}

/// Replaces recommendation cards with a plain link-style line.
struct PlainRecommendations;

impl BlockVisitor for PlainRecommendations {
    fn visit_recommendation(&mut self, content: &InlineText) -> VisitorAction {
        VisitorAction::Replace(format!("<p class=\"pick\">{}</p>\n", content.plain_text()))
    }
}

#[test]
fn test_default_visitor_all_continue() {
    let mut visitor = DefaultVisitor::new();
    let analysis = parse(SAMPLE);

    for block in &analysis {
        let action = unprose::render::visitor::visit_block(&mut visitor, block);
        assert_eq!(action, VisitorAction::Continue);
    }
}

#[test]
fn test_counting_visitor() {
    let mut visitor = CountingVisitor::default();
    let analysis = parse(SAMPLE);

    for block in &analysis {
        unprose::render::visitor::visit_block(&mut visitor, block);
    }

    assert_eq!(visitor.section_count, 1);
    assert_eq!(visitor.recommendation_count, 1);
    assert_eq!(visitor.bullet_count, 2);
    assert_eq!(visitor.numbered_count, 1);
    assert_eq!(visitor.paragraph_count, 1);
}

#[test]
fn test_replace_visitor_in_renderer() {
    let analysis = parse(SAMPLE);
    let html = HtmlRenderer::new(RenderOptions::default())
        .with_visitor(PlainRecommendations)
        .render(&analysis);

    assert!(html.contains("<p class=\"pick\">Phone X is great.</p>"));
    assert!(!html.contains("recommendation-item"));
    // Other blocks keep their default rendering
    assert!(html.contains("<h4 class=\"analysis-heading\">Summary</h4>"));
    assert!(html.contains("<ul class=\"analysis-list\">"));
}

#[test]
fn test_skip_paragraphs_in_renderer() {
    let analysis = parse(SAMPLE);
    let html = HtmlRenderer::new(RenderOptions::default())
        .with_visitor(SkipParagraphsVisitor)
        .render(&analysis);

    assert!(!html.contains("Closing thoughts."));
    assert!(html.contains("Also consider battery life."));
}

#[test]
fn test_composite_visitor_chaining() {
    let mut composite = CompositeVisitor::new()
        .with_visitor(SkipParagraphsVisitor)
        .with_visitor(PlainRecommendations)
        .with_visitor(DefaultVisitor);

    let analysis = parse(SAMPLE);
    let actions: Vec<VisitorAction> = analysis
        .iter()
        .map(|block| unprose::render::visitor::visit_block(&mut composite, block))
        .collect();

    // First matching action wins
    assert!(actions[1].is_replace());
    assert!(actions[5].should_skip());
    assert_eq!(actions[0], VisitorAction::Continue);
    assert_eq!(actions[2], VisitorAction::Continue);
}

#[test]
fn test_visitor_action_methods() {
    let continue_action = VisitorAction::Continue;
    assert!(!continue_action.should_skip());
    assert!(!continue_action.is_replace());
    assert!(continue_action.replacement().is_none());

    let skip_action = VisitorAction::Skip;
    assert!(skip_action.should_skip());
    assert!(!skip_action.is_replace());
    assert!(skip_action.replacement().is_none());

    let replace_action = VisitorAction::Replace("replaced".to_string());
    assert!(!replace_action.should_skip());
    assert!(replace_action.is_replace());
    assert_eq!(replace_action.replacement(), Some("replaced"));
}
