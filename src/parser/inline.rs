//! Emphasis span splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::InlineSpan;

/// Paired emphasis delimiter.
pub const EMPHASIS_MARKER: &str = "**";

/// `**text**` with no `*` inside; `****` matches as empty emphasis.
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]*)\*\*").expect("valid emphasis regex"));

/// Split text into plain and emphasis spans.
///
/// Emphasis is `**` around text that contains no `*`; the leftmost such
/// pair wins, so `***X***` is a literal `*`, emphasized `X`, literal `*`.
/// Markers that do not pair (`Nice **phone`, `**a*b**`) stay literal in a
/// plain span. Empty emphasis (`****`) is dropped, and neighbouring plain
/// text is merged into a single span.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut last = 0;

    for caps in EMPHASIS.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        plain.push_str(&text[last..whole.start()]);
        if !inner.as_str().is_empty() {
            flush_plain(&mut spans, &mut plain);
            spans.push(InlineSpan::emphasis(inner.as_str()));
        }
        last = whole.end();
    }

    plain.push_str(&text[last..]);
    flush_plain(&mut spans, &mut plain);
    spans
}

fn flush_plain(spans: &mut Vec<InlineSpan>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(InlineSpan::plain(std::mem::take(plain)));
    }
}
