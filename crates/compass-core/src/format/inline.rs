//! Inline emphasis splitting for a single line of response text.
//!
//! The default mode pairs delimiters strictly by position in the split
//! output, not by a matching scan. Unbalanced markers therefore
//! misclassify the tail of the line instead of erroring. Downstream
//! output compares against this exact segmentation, so the behavior is
//! pinned by the tests below.
//!
//! [`InlineMode::Matched`] is the opt-in corrected alternative: emphasis
//! opens only when a closing delimiter actually follows, and unpaired
//! delimiters are kept as literal text.

use compass_types::format::InlineSpan;

/// How emphasis delimiters are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InlineMode {
    /// Position-based pairing. Italic parity runs across the whole line,
    /// so an emphasis opened before a bold span continues after it.
    #[default]
    SplitParity,
    /// Strict in-order pair matching; unpaired delimiters stay literal.
    Matched,
}

/// Split one line (or list item) into inline spans.
///
/// Never fails: any input produces a span sequence whose visible text is
/// the input with the recognized markers removed.
pub fn split_inline(text: &str, mode: InlineMode) -> Vec<InlineSpan> {
    match mode {
        InlineMode::SplitParity => split_parity(text),
        InlineMode::Matched => split_matched(text),
    }
}

fn split_parity(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    // Italic state carries across bold spans: one parity for the whole line.
    let mut italic = false;

    for (seg_index, segment) in text.split("**").enumerate() {
        if seg_index % 2 == 1 {
            if !segment.is_empty() {
                spans.push(InlineSpan::bold(segment));
            }
            continue;
        }

        for (piece_index, piece) in segment.split('*').enumerate() {
            if piece_index > 0 {
                italic = !italic;
            }
            if piece.is_empty() {
                continue;
            }
            if italic {
                // Italic interiors keep embedded newlines unsplit.
                spans.push(InlineSpan::italic(piece));
            } else {
                push_plain(&mut spans, piece);
            }
        }
    }

    spans
}

fn split_matched(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let segments: Vec<&str> = text.split("**").collect();

    for (seg_index, segment) in segments.iter().enumerate() {
        if seg_index % 2 == 1 {
            if seg_index + 1 < segments.len() {
                if !segment.is_empty() {
                    spans.push(InlineSpan::bold(*segment));
                }
            } else {
                // No closing "**" ever arrived; keep the delimiter literal.
                push_plain(&mut spans, "**");
                matched_italics(&mut spans, segment);
            }
            continue;
        }
        matched_italics(&mut spans, segment);
    }

    spans
}

fn matched_italics(spans: &mut Vec<InlineSpan>, segment: &str) {
    let pieces: Vec<&str> = segment.split('*').collect();

    for (piece_index, piece) in pieces.iter().enumerate() {
        if piece_index % 2 == 1 {
            if piece_index + 1 < pieces.len() {
                if !piece.is_empty() {
                    spans.push(InlineSpan::italic(*piece));
                }
            } else {
                push_plain(spans, "*");
                push_plain(spans, piece);
            }
            continue;
        }
        push_plain(spans, piece);
    }
}

/// Append a plain run, re-inserting [`InlineSpan::LineBreak`] between the
/// pieces of any embedded newlines.
fn push_plain(spans: &mut Vec<InlineSpan>, text: &str) {
    for (index, part) in text.split('\n').enumerate() {
        if index > 0 {
            spans.push(InlineSpan::LineBreak);
        }
        if !part.is_empty() {
            spans.push(InlineSpan::text(part));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::format::spans_visible_text;

    #[test]
    fn plain_text_passes_through() {
        let spans = split_inline("just words", InlineMode::SplitParity);
        assert_eq!(spans, vec![InlineSpan::text("just words")]);
    }

    #[test]
    fn bold_and_italic_split() {
        let spans = split_inline("**bold** and *italic*", InlineMode::SplitParity);
        assert_eq!(
            spans,
            vec![
                InlineSpan::bold("bold"),
                InlineSpan::text(" and "),
                InlineSpan::italic("italic"),
            ]
        );
    }

    #[test]
    fn italic_classification_is_split_parity() {
        // Alternating by position, not by delimiter matching.
        let spans = split_inline("*a*b*c*", InlineMode::SplitParity);
        assert_eq!(
            spans,
            vec![
                InlineSpan::italic("a"),
                InlineSpan::text("b"),
                InlineSpan::italic("c"),
            ]
        );
    }

    #[test]
    fn italic_parity_runs_across_bold_spans() {
        let spans = split_inline("x *a **b** c* y", InlineMode::SplitParity);
        assert_eq!(
            spans,
            vec![
                InlineSpan::text("x "),
                InlineSpan::italic("a "),
                InlineSpan::bold("b"),
                InlineSpan::italic(" c"),
                InlineSpan::text(" y"),
            ]
        );
    }

    #[test]
    fn unbalanced_bold_claims_the_tail() {
        let spans = split_inline("a**b", InlineMode::SplitParity);
        assert_eq!(spans, vec![InlineSpan::text("a"), InlineSpan::bold("b")]);
    }

    #[test]
    fn odd_bold_count_misclassifies_after_last_marker() {
        let spans = split_inline("**a** tail **open", InlineMode::SplitParity);
        assert_eq!(
            spans,
            vec![
                InlineSpan::bold("a"),
                InlineSpan::text(" tail "),
                InlineSpan::bold("open"),
            ]
        );
    }

    #[test]
    fn adjacent_bold_markers_leave_no_empty_span() {
        let spans = split_inline("a****b", InlineMode::SplitParity);
        assert_eq!(spans, vec![InlineSpan::text("a"), InlineSpan::text("b")]);
    }

    #[test]
    fn embedded_newlines_become_line_breaks() {
        let spans = split_inline("a\n\nb", InlineMode::SplitParity);
        assert_eq!(
            spans,
            vec![
                InlineSpan::text("a"),
                InlineSpan::LineBreak,
                InlineSpan::LineBreak,
                InlineSpan::text("b"),
            ]
        );
    }

    #[test]
    fn visible_text_equals_input_with_markers_removed() {
        let input = "start **bold** mid *ital* and *open tail";
        let spans = split_inline(input, InlineMode::SplitParity);
        let expected: String = input.replace("**", "").replace('*', "");
        assert_eq!(spans_visible_text(&spans), expected);
    }

    #[test]
    fn star_inside_bold_segment_stays_literal() {
        let spans = split_inline("**a*b**", InlineMode::SplitParity);
        assert_eq!(spans, vec![InlineSpan::bold("a*b")]);
    }

    #[test]
    fn matched_mode_keeps_unpaired_bold_literal() {
        let spans = split_inline("a**b", InlineMode::Matched);
        assert_eq!(
            spans,
            vec![
                InlineSpan::text("a"),
                InlineSpan::text("**"),
                InlineSpan::text("b"),
            ]
        );
    }

    #[test]
    fn matched_mode_keeps_unpaired_italic_literal() {
        let spans = split_inline("a*b*c*d", InlineMode::Matched);
        assert_eq!(
            spans,
            vec![
                InlineSpan::text("a"),
                InlineSpan::italic("b"),
                InlineSpan::text("c"),
                InlineSpan::text("*"),
                InlineSpan::text("d"),
            ]
        );
    }

    #[test]
    fn matched_mode_agrees_on_balanced_input() {
        let input = "**bold** and *italic*";
        assert_eq!(
            split_inline(input, InlineMode::Matched),
            split_inline(input, InlineMode::SplitParity),
        );
    }
}
