//! Structured output of the response formatter.
//!
//! A formatted response is an ordered sequence of [`Block`]s, each made of
//! [`InlineSpan`]s. These are produced transiently per render and never
//! persisted.

use serde::{Deserialize, Serialize};

/// A run of text within a block carrying one formatting treatment.
///
/// Bold and italic spans nest only as flat runs: the splitting algorithm
/// only ever puts a single [`InlineSpan::Text`] inside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    Text(String),
    Bold(Vec<InlineSpan>),
    Italic(Vec<InlineSpan>),
    LineBreak,
}

impl InlineSpan {
    pub fn text(s: impl Into<String>) -> Self {
        InlineSpan::Text(s.into())
    }

    pub fn bold(s: impl Into<String>) -> Self {
        InlineSpan::Bold(vec![InlineSpan::Text(s.into())])
    }

    pub fn italic(s: impl Into<String>) -> Self {
        InlineSpan::Italic(vec![InlineSpan::Text(s.into())])
    }

    /// The text this span contributes to the screen, markers ignored.
    /// Line breaks count as a newline.
    pub fn visible_text(&self) -> String {
        match self {
            InlineSpan::Text(s) => s.clone(),
            InlineSpan::Bold(inner) | InlineSpan::Italic(inner) => {
                inner.iter().map(InlineSpan::visible_text).collect()
            }
            InlineSpan::LineBreak => "\n".to_string(),
        }
    }
}

/// The visible text of a span sequence, concatenated in order.
pub fn spans_visible_text(spans: &[InlineSpan]) -> String {
    spans.iter().map(InlineSpan::visible_text).collect()
}

/// A top-level structural unit of formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A heading; only levels 2 and 3 are ever produced.
    Heading { level: u8, spans: Vec<InlineSpan> },
    Paragraph { spans: Vec<InlineSpan> },
    /// One block per run of consecutive list-item lines.
    BulletList { items: Vec<Vec<InlineSpan>> },
}

impl Block {
    /// The visible text of the whole block, items joined by newlines.
    pub fn visible_text(&self) -> String {
        match self {
            Block::Heading { spans, .. } | Block::Paragraph { spans } => {
                spans_visible_text(spans)
            }
            Block::BulletList { items } => items
                .iter()
                .map(|item| spans_visible_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
