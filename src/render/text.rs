//! Plain text rendering for analyses.

use crate::model::{Analysis, Block};

use super::RenderOptions;

/// Convert an analysis to plain text.
///
/// Emphasis markers are dropped. Section headers put their body on the next
/// line, bullets and recommendations get the configured list marker, and
/// numbered items are renumbered from 1 within each consecutive run.
pub fn to_text(analysis: &Analysis, options: &RenderOptions) -> String {
    let mut output = String::new();
    let mut number = 0u32;

    for block in analysis {
        if !matches!(block, Block::NumberedItem { .. }) {
            number = 0;
        }

        match block {
            Block::SectionHeader { title, body } => {
                if !output.is_empty() {
                    output.push('\n');
                }
                output.push_str(&title.plain_text());
                output.push('\n');
                if let Some(body) = body {
                    output.push_str(&body.plain_text());
                    output.push('\n');
                }
            }
            Block::RecommendationItem { content } | Block::BulletItem { content } => {
                output.push(options.list_marker);
                output.push(' ');
                output.push_str(&content.plain_text());
                output.push('\n');
            }
            Block::NumberedItem { content } => {
                number += 1;
                output.push_str(&format!("{}. {}\n", number, content.plain_text()));
            }
            Block::Paragraph { content } => {
                output.push_str(content.plain_text().trim());
                output.push('\n');
            }
        }
    }

    output.trim_end().to_string()
}
