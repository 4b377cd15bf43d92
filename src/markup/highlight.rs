//! Keyword highlighting over plain text.

use std::ops::Range;

/// Split `text` into byte ranges, flagging occurrences of `keyword`.
///
/// Search is case-sensitive, leftmost-first and non-overlapping: after each hit the
/// search resumes at its end. An empty keyword yields a single unflagged range.
pub fn highlight_ranges(text: &str, keyword: &str) -> Vec<(Range<usize>, bool)> {
    if keyword.is_empty() {
        return vec![(0..text.len(), false)];
    }

    let mut ranges = Vec::new();
    let mut cursor = 0;
    for (start, hit) in text.match_indices(keyword) {
        if cursor < start {
            ranges.push((cursor..start, false));
        }
        cursor = start + hit.len();
        ranges.push((start..cursor, true));
    }
    if cursor < text.len() {
        ranges.push((cursor..text.len(), false));
    }
    ranges
}
