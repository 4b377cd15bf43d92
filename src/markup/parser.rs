//! Segment parser: tiered pattern matching with claimed-range arbitration.
//!
//! Tiers run in priority order (code fence, block math, inline math, inline code).
//! A match is kept only if none of its bytes were claimed by an earlier match, so
//! e.g. `$$` inside a fenced block never becomes math. Unclaimed text between
//! matches becomes one plain-text segment per non-empty line.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::claims::ClaimedRanges;
use super::error::MarkupError;
use super::plain::{plain_lines, push_plain_lines};
use super::segment::{MatchSpan, Segment};

/// Pattern category, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    CodeFence,
    BlockMath,
    InlineMath,
    InlineCode,
}

impl Tier {
    /// All tiers, highest priority first.
    pub const PRIORITY: [Tier; 4] = [
        Tier::CodeFence,
        Tier::BlockMath,
        Tier::InlineMath,
        Tier::InlineCode,
    ];

    /// Regex source for this tier.
    pub fn pattern(self) -> &'static str {
        match self {
            // ```lang ... ``` with an optional alphanumeric language tag.
            Tier::CodeFence => r"```([a-zA-Z0-9]*)([\s\S]*?)```",
            // A lone `$` inside the body must not be followed by another `$`.
            Tier::BlockMath => r"\$\$((?:[^$]|\$[^$])+?)\$\$",
            Tier::InlineMath => r"\$([^$\n]+?)\$",
            Tier::InlineCode => r"`([^`]*?)`",
        }
    }

    fn segment<'a>(self, caps: &Captures<'a>) -> Segment<'a> {
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        match self {
            Tier::CodeFence => Segment::CodeBlock {
                content: group(2).trim(),
                language: group(1).trim(),
            },
            Tier::BlockMath | Tier::InlineMath => Segment::Math(group(0)),
            Tier::InlineCode => Segment::InlineCode(group(1)),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::CodeFence => write!(f, "code fence"),
            Tier::BlockMath => write!(f, "block math"),
            Tier::InlineMath => write!(f, "inline math"),
            Tier::InlineCode => write!(f, "inline code"),
        }
    }
}

#[derive(Debug)]
struct TierMatcher {
    tier: Tier,
    regex: Regex,
}

/// Compiled tier patterns. Cheap to share; holds no per-call state.
#[derive(Debug)]
pub struct SegmentParser {
    matchers: Vec<TierMatcher>,
}

impl SegmentParser {
    /// Compile the built-in patterns.
    pub fn new() -> Result<Self, MarkupError> {
        Self::from_patterns(Tier::PRIORITY.map(|tier| (tier, tier.pattern())))
    }

    /// Compile `patterns`, applied in the given order.
    pub(crate) fn from_patterns<'p, I>(patterns: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = (Tier, &'p str)>,
    {
        let matchers = patterns
            .into_iter()
            .map(|(tier, pattern)| {
                Regex::new(pattern)
                    .map(|regex| TierMatcher { tier, regex })
                    .map_err(|source| MarkupError::Pattern { tier, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { matchers })
    }

    /// Claimed spans of `text`, sorted by start offset.
    pub fn spans<'a>(&self, text: &'a str) -> Vec<MatchSpan<'a>> {
        let mut claims = ClaimedRanges::new();
        let mut spans = Vec::new();

        for matcher in &self.matchers {
            let mut found = 0usize;
            let mut rejected = 0usize;
            for caps in matcher.regex.captures_iter(text) {
                let Some(whole) = caps.get(0) else {
                    continue;
                };
                found += 1;
                if !claims.claim(whole.range()) {
                    rejected += 1;
                    continue;
                }
                spans.push(MatchSpan::new(whole.range(), matcher.tier.segment(&caps)));
            }
            if found > 0 {
                log::debug!(
                    "{}: {} matches, {} overlapped higher tiers",
                    matcher.tier,
                    found,
                    rejected
                );
            }
        }

        log::debug!("{} claimed ranges in {} bytes", claims.len(), text.len());
        spans.sort_by_key(|span| span.range.start);
        spans
    }

    /// Parse `text` into segments in source order.
    pub fn parse<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for span in self.spans(text) {
            if cursor < span.range.start {
                push_plain_lines(&text[cursor..span.range.start], &mut segments);
            }
            cursor = span.range.end;
            segments.push(span.segment);
        }
        if cursor < text.len() {
            push_plain_lines(&text[cursor..], &mut segments);
        }
        segments
    }
}

static SHARED_PARSER: OnceLock<Result<SegmentParser, MarkupError>> = OnceLock::new();

fn shared_parser() -> Result<&'static SegmentParser, &'static MarkupError> {
    SHARED_PARSER.get_or_init(SegmentParser::new).as_ref()
}

/// Parse with `parser`, or fall back to plain lines if it failed to build.
pub(crate) fn parse_or_fallback<'a>(
    parser: Result<&SegmentParser, &MarkupError>,
    text: &'a str,
) -> Vec<Segment<'a>> {
    match parser {
        Ok(parser) => parser.parse(text),
        Err(e) => {
            log::warn!("Segment patterns unavailable, rendering as plain text: {}", e);
            plain_lines(text)
        }
    }
}

/// Split a message body into plain text, inline code, code blocks and math.
///
/// Never fails: if the patterns cannot be compiled the body is returned as plain lines.
pub fn parse_segments(text: &str) -> Vec<Segment<'_>> {
    parse_or_fallback(shared_parser(), text)
}
