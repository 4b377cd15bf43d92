//! Segment types produced by the parser.

use std::ops::Range;

use serde::Serialize;

/// Delimiter pair wrapping a block math expression.
pub(crate) const BLOCK_MATH_DELIMITER: &str = "$$";
/// Delimiter pair wrapping an inline math expression.
pub(crate) const INLINE_MATH_DELIMITER: &str = "$";

/// One classified, contiguous piece of a message body.
///
/// Segments borrow from the text they were parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment<'a> {
    /// A single non-empty line of plain text (may still contain Markdown).
    PlainText(&'a str),
    /// Backtick-delimited inline code, without the backticks.
    InlineCode(&'a str),
    /// Fenced code block. `language` is empty when the fence has no tag.
    CodeBlock { content: &'a str, language: &'a str },
    /// Math expression including its `$` or `$$` delimiters.
    Math(&'a str),
}

/// How a math segment should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MathDisplay {
    Inline,
    Block,
}

impl<'a> Segment<'a> {
    /// Snake-case name of the variant; same as the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Segment::PlainText(_) => "plain_text",
            Segment::InlineCode(_) => "inline_code",
            Segment::CodeBlock { .. } => "code_block",
            Segment::Math(_) => "math",
        }
    }

    /// The text payload of the segment.
    pub fn content(&self) -> &'a str {
        match self {
            Segment::PlainText(s) | Segment::InlineCode(s) | Segment::Math(s) => s,
            Segment::CodeBlock { content, .. } => content,
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, Segment::PlainText(_))
    }

    /// Block when the expression both starts and ends with `$$`. None for non-math segments.
    pub fn math_display(&self) -> Option<MathDisplay> {
        match self {
            Segment::Math(expr) => Some(math_display_of(expr)),
            _ => None,
        }
    }

    /// Math expression with its delimiters stripped.
    pub fn math_body(&self) -> Option<&'a str> {
        let Segment::Math(expr) = self else {
            return None;
        };
        let delimiter = match math_display_of(expr) {
            MathDisplay::Block => BLOCK_MATH_DELIMITER,
            MathDisplay::Inline => INLINE_MATH_DELIMITER,
        };
        let body = expr.strip_prefix(delimiter).unwrap_or(expr);
        Some(body.strip_suffix(delimiter).unwrap_or(body))
    }
}

fn math_display_of(expr: &str) -> MathDisplay {
    // "$$" alone is an inline "$" pair around nothing, not a block.
    if expr.len() >= 2 * BLOCK_MATH_DELIMITER.len()
        && expr.starts_with(BLOCK_MATH_DELIMITER)
        && expr.ends_with(BLOCK_MATH_DELIMITER)
    {
        MathDisplay::Block
    } else {
        MathDisplay::Inline
    }
}

/// A claimed byte range of the source text and the segment it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSpan<'a> {
    pub range: Range<usize>,
    pub segment: Segment<'a>,
}

impl<'a> MatchSpan<'a> {
    pub fn new(range: Range<usize>, segment: Segment<'a>) -> Self {
        Self { range, segment }
    }
}
