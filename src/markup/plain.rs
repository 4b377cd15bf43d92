//! Plain-text runs: one segment per non-empty line.

use super::segment::Segment;

/// Split an unclaimed run into `PlainText` segments, one per non-empty line.
///
/// Lines end at `\n` only, so a `\r` stays part of its line. Whitespace-only lines are kept.
pub(crate) fn push_plain_lines<'a>(run: &'a str, out: &mut Vec<Segment<'a>>) {
    out.extend(
        run.split('\n')
            .filter(|line| !line.is_empty())
            .map(Segment::PlainText),
    );
}

/// Whole text as plain lines, with no pattern detection.
pub(crate) fn plain_lines(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    push_plain_lines(text, &mut out);
    out
}
