//! Markup segmentation: reasoning extraction, tiered segment parsing and keyword highlighting.

mod claims;
mod error;
mod highlight;
pub mod inline;
mod parser;
mod plain;
pub mod reasoning;
mod segment;

use serde::Serialize;

pub use error::MarkupError;
pub use highlight::highlight_ranges;
pub use inline::{InlineSpan, InlineStyle, parse_inline, render_plain_line};
pub use parser::{SegmentParser, Tier, parse_segments};
pub use reasoning::{ExtractionResult, ReasoningExtractor, extract_reasoning};
pub use segment::{MatchSpan, MathDisplay, Segment};

/// A message split into its reasoning block and answer body.
///
/// Segments are parsed on demand from `body` and borrow from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkupDocument {
    pub reasoning: Option<String>,
    pub body: String,
}

impl MarkupDocument {
    /// Split `text` with the default `<think>` markers.
    pub fn parse(text: &str) -> Self {
        Self::with_extractor(text, &ReasoningExtractor::default())
    }

    pub fn with_extractor(text: &str, extractor: &ReasoningExtractor) -> Self {
        let ExtractionResult {
            reasoning,
            remaining,
        } = extractor.extract(text);
        Self {
            reasoning,
            body: remaining,
        }
    }

    pub fn segments(&self) -> Vec<Segment<'_>> {
        parse_segments(&self.body)
    }

    /// Serializable snapshot of the document and its segments.
    pub fn view(&self) -> DocumentView<'_> {
        DocumentView {
            reasoning: self.reasoning.as_deref(),
            segments: self.segments(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView<'a> {
    pub reasoning: Option<&'a str>,
    pub segments: Vec<Segment<'a>>,
}
