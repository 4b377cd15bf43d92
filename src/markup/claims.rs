//! Sorted set of claimed byte ranges used to arbitrate between pattern tiers.

use std::ops::Range;

/// Non-overlapping half-open ranges, kept sorted by start.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClaimedRanges {
    ranges: Vec<Range<usize>>,
}

impl ClaimedRanges {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True if `range` shares at least one byte with a claimed range.
    pub(crate) fn intersects(&self, range: &Range<usize>) -> bool {
        if range.is_empty() {
            return false;
        }
        // First claimed range that ends after `range` starts; only it can overlap.
        let idx = self.ranges.partition_point(|r| r.end <= range.start);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start < range.end)
    }

    /// Claim `range`. Returns false (and claims nothing) if it overlaps an existing claim.
    pub(crate) fn claim(&mut self, range: Range<usize>) -> bool {
        if range.is_empty() || self.intersects(&range) {
            return false;
        }
        let idx = self.ranges.partition_point(|r| r.start < range.start);
        self.ranges.insert(idx, range);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.ranges.len()
    }
}
