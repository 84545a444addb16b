//! Response formatter: markdown-like text to structured blocks.
//!
//! Line-oriented, two passes: block classification here, inline emphasis
//! splitting in [`inline`]. The formatter never errors; malformed markup
//! degrades into the misclassifications documented in [`inline`].

pub mod inline;

use compass_types::format::Block;

pub use inline::{InlineMode, split_inline};

/// Format a full backend response with the default inline mode.
pub fn format_response(text: &str) -> Vec<Block> {
    format_response_with(text, InlineMode::default())
}

/// Format a full backend response.
///
/// Lines that are empty after trimming are discarded. A run of
/// consecutive list-item lines collapses into one [`Block::BulletList`]
/// positioned where the run occurred; every other non-empty line becomes
/// its own block, in input order.
pub fn format_response_with(text: &str, mode: InlineMode) -> Vec<Block> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut blocks = Vec::new();
    let mut list_items = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let is_list_item = line.starts_with("- ") || line.starts_with("* ");

        if is_list_item {
            list_items.push(split_inline(&line[2..], mode));
        }

        // A non-list line closes the run; so does the end of input.
        if (!is_list_item || index == lines.len() - 1) && !list_items.is_empty() {
            blocks.push(Block::BulletList {
                items: std::mem::take(&mut list_items),
            });
        }

        if !is_list_item {
            if let Some(rest) = line.strip_prefix("### ") {
                blocks.push(Block::Heading {
                    level: 3,
                    spans: split_inline(rest, mode),
                });
            } else if let Some(rest) = line.strip_prefix("## ") {
                blocks.push(Block::Heading {
                    level: 2,
                    spans: split_inline(rest, mode),
                });
            } else {
                blocks.push(Block::Paragraph {
                    spans: split_inline(line, mode),
                });
            }
        }
    }

    blocks
}
