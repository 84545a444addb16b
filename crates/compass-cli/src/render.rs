//! Terminal rendering of formatted advice.
//!
//! Purely presentational: consumes the formatter's blocks and the
//! citation list and maps them to console styling. Span order is kept
//! exactly as produced.

use console::style;

use compass_types::advice::{Citation, CitationKind};
use compass_types::format::{Block, InlineSpan, spans_visible_text};

use crate::i18n::Messages;

/// Render formatted blocks for the terminal.
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let text = render_spans(spans);
                let styled = match level {
                    2 => style(text).cyan().bold().to_string(),
                    _ => style(text).bold().to_string(),
                };
                out.push_str(&styled);
                out.push('\n');
            }
            Block::Paragraph { spans } => {
                out.push_str(&render_spans(spans));
                out.push('\n');
            }
            Block::BulletList { items } => {
                for item in items {
                    out.push_str("  • ");
                    out.push_str(&render_spans(item));
                    out.push('\n');
                }
            }
        }
        out.push('\n');
    }

    out
}

fn render_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(text) => text.clone(),
            InlineSpan::Bold(inner) => style(spans_visible_text(inner)).bold().to_string(),
            InlineSpan::Italic(inner) => style(spans_visible_text(inner)).italic().to_string(),
            InlineSpan::LineBreak => "\n".to_string(),
        })
        .collect()
}

/// Render the citation list under its localized heading.
pub fn render_citations(citations: &[Citation], msgs: &Messages) -> String {
    if citations.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&style(msgs.sources_title).bold().to_string());
    out.push('\n');

    for citation in citations {
        let marker = match citation.kind {
            CitationKind::Web => "[web] ",
            CitationKind::Maps => "[maps]",
        };
        out.push_str(&format!(
            "  {} {} {}\n",
            style(marker).dim(),
            citation.title,
            style(&citation.uri).dim(),
        ));
    }

    out
}
