//! # text-markup
//!
//! Segmentation engine for chat-style model output.
//!
//! Raw text may carry a `<think>...</think>` reasoning block, Markdown, LaTeX math
//! and fenced or inline code. The engine splits it into:
//! - an optional reasoning body ([`extract_reasoning`])
//! - an ordered list of typed [`Segment`]s for the rest ([`parse_segments`])
//!
//! Keyword highlighting over plain text is available via [`highlight_ranges`].
//! Everything here is a pure function of its input; rendering is left to callers.

pub mod app;
pub mod config;
pub mod markup;

pub use markup::{
    ExtractionResult, MarkupDocument, MathDisplay, ReasoningExtractor, Segment,
    extract_reasoning, highlight_ranges, parse_segments,
};
