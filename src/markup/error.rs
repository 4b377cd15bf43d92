//! Internal errors of the segmentation engine. Never surfaced by the public entry points.

use super::parser::Tier;

#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("invalid {tier} pattern: {source}")]
    Pattern {
        tier: Tier,
        #[source]
        source: regex::Error,
    },
}
