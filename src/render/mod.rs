//! Rendering module for converting analyses to various output formats.
//!
//! Renderers only consume [`Analysis`](crate::model::Analysis) values; the
//! block pipeline itself never renders.

mod html;
mod json;
mod options;
mod result;
mod text;
pub mod visitor;

pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{BlockStats, RenderResult};
pub use text::to_text;
pub use visitor::{
    BlockVisitor, CompositeVisitor, DefaultVisitor, SkipParagraphsVisitor, VisitorAction,
};
