//! Reasoning block extraction: split `<think>...</think>` from the answer body.

use serde::Serialize;

pub const DEFAULT_OPEN_MARKER: &str = "<think>";
pub const DEFAULT_CLOSE_MARKER: &str = "</think>";

/// Result of separating the reasoning block from the rest of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Trimmed reasoning text, `None` when the input has no opening marker.
    pub reasoning: Option<String>,
    /// Text outside the reasoning block.
    pub remaining: String,
}

/// Splits a single reasoning block out of a message.
///
/// Only the first opening marker and the first closing marker after it are
/// considered. A closing marker that appears before the opening marker is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasoningExtractor {
    open: String,
    close: String,
}

impl Default for ReasoningExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_MARKER, DEFAULT_CLOSE_MARKER)
    }
}

impl ReasoningExtractor {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    pub fn open_marker(&self) -> &str {
        &self.open
    }

    pub fn close_marker(&self) -> &str {
        &self.close
    }

    pub fn extract(&self, input: &str) -> ExtractionResult {
        let Some(open_start) = input.find(&self.open) else {
            return ExtractionResult {
                reasoning: None,
                remaining: input.to_string(),
            };
        };
        let body_start = open_start + self.open.len();

        match input[body_start..].find(&self.close) {
            Some(rel) => {
                let body_end = body_start + rel;
                let block_end = body_end + self.close.len();
                // Stray opening markers inside the block are not part of the reasoning.
                let body = input[body_start..body_end].replace(&self.open, "");
                let reasoning = body.trim();

                let mut remaining = String::with_capacity(input.len() - (block_end - open_start));
                remaining.push_str(&input[..open_start]);
                remaining.push_str(&input[block_end..]);

                log::debug!(
                    "reasoning block at {}..{} ({} bytes of reasoning)",
                    open_start,
                    block_end,
                    reasoning.len()
                );
                ExtractionResult {
                    reasoning: Some(reasoning.to_string()),
                    remaining,
                }
            }
            None => {
                // Unclosed block: the whole message is still reasoning.
                log::debug!("reasoning block opened at {} but never closed", open_start);
                ExtractionResult {
                    reasoning: Some(input.replace(&self.open, "").trim().to_string()),
                    remaining: String::new(),
                }
            }
        }
    }
}

/// Extract a `<think>...</think>` block with the default markers.
pub fn extract_reasoning(input: &str) -> ExtractionResult {
    ReasoningExtractor::default().extract(input)
}
