//! Inline Markdown for plain-text lines: **strong**, `code`, headings, lists, tables, links.
//!
//! Produces style-agnostic spans; callers pick fonts and colors. Keyword highlighting
//! applies to the rendered characters, so markers such as `**` never match.

use serde::Serialize;

use super::highlight::highlight_ranges;

const BULLET: &str = "• ";
const CELL_SEPARATOR: &str = " │ ";

/// Role of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineStyle {
    Plain,
    Strong,
    Code,
    Link,
    Heading,
    ListMarker,
    CellSeparator,
}

/// A run of rendered text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub text: String,
    pub style: InlineStyle,
    pub highlighted: bool,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, style: InlineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            highlighted: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, InlineStyle::Plain)
    }

    fn slice(&self, start: usize, end: usize, highlighted: bool) -> Self {
        Self {
            text: self.text[start..end].to_string(),
            style: self.style,
            highlighted,
        }
    }
}

/// Parse one line of inline Markdown.
pub fn parse_inline(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    // Heading: one or more # at line start
    if trimmed.starts_with('#') {
        let content = trimmed.trim_start_matches('#').trim_start();
        if !content.is_empty() {
            spans.push(InlineSpan::new(content, InlineStyle::Heading));
        }
        return spans;
    }
    // Bullet list: - or * at line start
    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        if !indent.is_empty() {
            spans.push(InlineSpan::plain(indent));
        }
        spans.push(InlineSpan::new(BULLET, InlineStyle::ListMarker));
        spans.extend(parse_emphasis(item));
        return spans;
    }
    // Table row: | cell | cell |
    if trimmed.starts_with('|') {
        let cells: Vec<&str> = trimmed
            .split('|')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        if !cells.is_empty() {
            for (i, cell) in cells.into_iter().enumerate() {
                if i > 0 {
                    spans.push(InlineSpan::new(CELL_SEPARATOR, InlineStyle::CellSeparator));
                }
                spans.extend(parse_emphasis(cell));
            }
            return spans;
        }
    }
    // Numbered list: "1. " or "1) "
    if let Some((num, item)) = numbered_list_prefix(trimmed) {
        if !indent.is_empty() {
            spans.push(InlineSpan::plain(indent));
        }
        spans.push(InlineSpan::new(format!("{}. ", num), InlineStyle::ListMarker));
        spans.extend(parse_emphasis(item));
        return spans;
    }
    spans.extend(parse_emphasis(line));
    spans
}

/// Parse "N. " or "N) " at start. Returns (number, rest) or None.
fn numbered_list_prefix(s: &str) -> Option<(&str, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let (num, rest) = s.split_at(digits);
    rest.strip_prefix(". ")
        .or_else(|| rest.strip_prefix(") "))
        .map(|item| (num, item))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Strong,
    Code,
    Link,
}

/// Earliest inline marker in `s`. Ties resolve Strong, then Code, then Link.
fn next_marker(s: &str) -> Option<(Marker, usize)> {
    [
        (Marker::Strong, s.find("**")),
        (Marker::Code, s.find('`')),
        (Marker::Link, s.find('[')),
    ]
    .into_iter()
    .filter_map(|(marker, pos)| pos.map(|p| (marker, p)))
    .min_by_key(|&(_, pos)| pos)
}

/// Parse **strong**, `code` and [text](url) within a line. Unterminated markers stay literal.
fn parse_emphasis(s: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let Some((marker, pos)) = next_marker(rest) else {
            spans.push(InlineSpan::plain(rest));
            break;
        };
        if pos > 0 {
            spans.push(InlineSpan::plain(&rest[..pos]));
        }
        rest = &rest[pos..];
        match marker {
            Marker::Strong => {
                rest = &rest[2..];
                match rest.find("**") {
                    Some(end) => {
                        spans.push(InlineSpan::new(&rest[..end], InlineStyle::Strong));
                        rest = &rest[end + 2..];
                    }
                    None => spans.push(InlineSpan::plain("**")),
                }
            }
            Marker::Code => {
                rest = &rest[1..];
                match rest.find('`') {
                    Some(end) => {
                        spans.push(InlineSpan::new(&rest[..end], InlineStyle::Code));
                        rest = &rest[end + 1..];
                    }
                    None => spans.push(InlineSpan::plain("`")),
                }
            }
            Marker::Link => {
                rest = &rest[1..];
                let Some(end_br) = rest.find(']') else {
                    spans.push(InlineSpan::plain("["));
                    continue;
                };
                let text = &rest[..end_br];
                rest = &rest[end_br + 1..];
                let url_end = rest
                    .strip_prefix('(')
                    .and_then(|after| after.find(')').map(|end| end + 2));
                match url_end {
                    Some(end) => {
                        spans.push(InlineSpan::new(text, InlineStyle::Link));
                        rest = &rest[end..];
                    }
                    None => spans.push(InlineSpan::plain(format!("[{}]", text))),
                }
            }
        }
    }
    merge_plain(spans)
}

/// Join adjacent plain spans left behind by literal markers.
fn merge_plain(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let mut out: Vec<InlineSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match out.last_mut() {
            Some(prev) if prev.style == InlineStyle::Plain && span.style == InlineStyle::Plain => {
                prev.text.push_str(&span.text);
            }
            _ => out.push(span),
        }
    }
    out
}

/// Flag occurrences of `keyword` in the rendered text, splitting spans at match edges.
pub fn highlight_spans(spans: Vec<InlineSpan>, keyword: &str) -> Vec<InlineSpan> {
    if keyword.is_empty() {
        return spans;
    }
    let rendered: String = spans.iter().map(|s| s.text.as_str()).collect();
    let hits: Vec<_> = highlight_ranges(&rendered, keyword)
        .into_iter()
        .filter_map(|(range, hit)| hit.then_some(range))
        .collect();
    if hits.is_empty() {
        return spans;
    }

    let mut out = Vec::with_capacity(spans.len() + 2 * hits.len());
    let mut offset = 0;
    for span in spans {
        let start = offset;
        let end = start + span.text.len();
        offset = end;
        if span.text.is_empty() {
            continue;
        }
        let mut cursor = start;
        for hit in hits.iter().filter(|h| h.start < end && h.end > start) {
            let hit_start = hit.start.max(start);
            let hit_end = hit.end.min(end);
            if cursor < hit_start {
                out.push(span.slice(cursor - start, hit_start - start, false));
            }
            out.push(span.slice(hit_start - start, hit_end - start, true));
            cursor = hit_end;
        }
        if cursor < end {
            out.push(span.slice(cursor - start, end - start, false));
        }
    }
    out
}

/// Parse a plain-text line and highlight `keyword` in its rendered text.
pub fn render_plain_line(line: &str, keyword: &str) -> Vec<InlineSpan> {
    highlight_spans(parse_inline(line), keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[InlineSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn parse_inline_plain() {
        let spans = parse_inline("hello");
        assert_eq!(spans, [InlineSpan::plain("hello")]);
    }

    #[test]
    fn parse_inline_strong() {
        let spans = parse_inline("**bold** text");
        assert_eq!(texts(&spans), ["bold", " text"]);
        assert_eq!(spans[0].style, InlineStyle::Strong);
        assert_eq!(spans[1].style, InlineStyle::Plain);
    }

    #[test]
    fn parse_inline_code() {
        let spans = parse_inline("Use `println!` macro");
        assert_eq!(texts(&spans), ["Use ", "println!", " macro"]);
        assert_eq!(spans[1].style, InlineStyle::Code);
    }

    #[test]
    fn parse_inline_heading() {
        let spans = parse_inline("## Section");
        assert_eq!(spans, [InlineSpan::new("Section", InlineStyle::Heading)]);
        assert!(parse_inline("###").is_empty());
    }

    #[test]
    fn parse_inline_dash_bullet_keeps_indent() {
        assert_eq!(texts(&parse_inline("- item")), ["• ", "item"]);
        assert_eq!(texts(&parse_inline("    - nested")), ["    ", "• ", "nested"]);
        assert_eq!(texts(&parse_inline("-item")), ["-item"]);
        assert_eq!(texts(&parse_inline("a - b")), ["a - b"]);
    }

    #[test]
    fn parse_inline_bullet_list() {
        let spans = parse_inline("  - item **one**");
        assert_eq!(texts(&spans), ["  ", "• ", "item ", "one"]);
        assert_eq!(spans[1].style, InlineStyle::ListMarker);
        assert_eq!(spans[3].style, InlineStyle::Strong);
    }

    #[test]
    fn parse_inline_numbered_list() {
        let spans = parse_inline("2) second");
        assert_eq!(texts(&spans), ["2. ", "second"]);
        assert_eq!(spans[0].style, InlineStyle::ListMarker);
        assert_eq!(texts(&parse_inline("12 apples")), ["12 apples"]);
    }

    #[test]
    fn parse_inline_link() {
        let spans = parse_inline("See [docs](https://example.com) for more.");
        assert_eq!(texts(&spans), ["See ", "docs", " for more."]);
        assert_eq!(spans[1].style, InlineStyle::Link);
    }

    #[test]
    fn parse_inline_bracket_without_url() {
        let spans = parse_inline("array[0] is first");
        assert_eq!(spans, [InlineSpan::plain("array[0] is first")]);
    }

    #[test]
    fn parse_inline_table_row() {
        let spans = parse_inline("| name | value |");
        assert_eq!(texts(&spans), ["name", " │ ", "value"]);
        assert_eq!(spans[1].style, InlineStyle::CellSeparator);
    }

    #[test]
    fn parse_inline_unterminated_markers_stay_literal() {
        assert_eq!(parse_inline("a ** b"), [InlineSpan::plain("a ** b")]);
        assert_eq!(parse_inline("tick ` here"), [InlineSpan::plain("tick ` here")]);
        assert_eq!(parse_inline("open [ bracket"), [InlineSpan::plain("open [ bracket")]);
    }

    #[test]
    fn highlight_spans_across_styles() {
        let spans = render_plain_line("**key**word and keyword", "keyword");
        let flagged: Vec<(&str, InlineStyle, bool)> = spans
            .iter()
            .map(|s| (s.text.as_str(), s.style, s.highlighted))
            .collect();
        assert_eq!(
            flagged,
            [
                ("key", InlineStyle::Strong, true),
                ("word", InlineStyle::Plain, true),
                (" and ", InlineStyle::Plain, false),
                ("keyword", InlineStyle::Plain, true),
            ]
        );
    }

    #[test]
    fn highlight_spans_ignores_markup_characters() {
        let spans = render_plain_line("**a** b", "**");
        assert!(spans.iter().all(|s| !s.highlighted));
    }

    #[test]
    fn highlight_spans_empty_keyword_is_identity() {
        let spans = parse_inline("Use `x` here");
        assert_eq!(highlight_spans(spans.clone(), ""), spans);
    }
}
