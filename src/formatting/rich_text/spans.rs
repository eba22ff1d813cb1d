//! Applies inline spans to a block's text.
//!
//! Spans may overlap arbitrarily. Output stays well-formed: when a span
//! closes while spans opened after it are still active, those are closed
//! first and reopened right after.

use super::annotations::{escape_text, span_tags, SpanTags};
use crate::model::Span;

/// A span clamped to the text, with its markup resolved.
struct ActiveSpan {
    start: usize,
    end: usize,
    tags: SpanTags,
}

/// Renders `text` with `spans` applied, as escaped inline HTML.
pub fn render_inline(text: &str, spans: &[Span]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();

    let mut active: Vec<ActiveSpan> = spans
        .iter()
        .filter_map(|span| {
            let end = span.end.min(len);
            if span.start >= end {
                return None;
            }
            span_tags(&span.kind).map(|tags| ActiveSpan {
                start: span.start,
                end,
                tags,
            })
        })
        .collect();

    if active.is_empty() {
        return escape_text(text);
    }

    // Outer spans first: earlier start, then longer reach. Stable for ties.
    active.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut boundaries: Vec<usize> = active
        .iter()
        .flat_map(|s| [s.start, s.end])
        .chain([0, len])
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut output = String::with_capacity(text.len() + active.len() * 16);
    let mut open: Vec<usize> = Vec::new();
    let mut next_to_open = 0;

    for (i, &position) in boundaries.iter().enumerate() {
        close_ending_at(position, &active, &mut open, &mut output);

        while next_to_open < active.len() && active[next_to_open].start == position {
            output.push_str(&active[next_to_open].tags.open);
            open.push(next_to_open);
            next_to_open += 1;
        }

        if let Some(&next) = boundaries.get(i + 1) {
            let segment: String = chars[position..next].iter().collect();
            output.push_str(&escape_text(&segment));
        }
    }

    // Every span ends at or before `len`, so nothing is left open.
    debug_assert!(open.is_empty());
    output
}

/// Closes every open span ending at `position`, reopening the ones that
/// were nested inside them but continue past it.
fn close_ending_at(position: usize, spans: &[ActiveSpan], open: &mut Vec<usize>, output: &mut String) {
    let Some(lowest) = open.iter().position(|&idx| spans[idx].end == position) else {
        return;
    };

    let closed: Vec<usize> = open.drain(lowest..).collect();
    for &idx in closed.iter().rev() {
        output.push_str(spans[idx].tags.close);
    }

    for idx in closed {
        if spans[idx].end > position {
            output.push_str(&spans[idx].tags.open);
            open.push(idx);
        }
    }
}
