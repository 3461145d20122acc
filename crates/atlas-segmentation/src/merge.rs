//! Segment merging.
//!
//! Fuses undersized segments into neighbors so topic count stays
//! proportionate to conversation length. Each merge strictly reduces
//! segment count, so the pass terminates; worst case everything merges
//! into one segment. The partition stays a contiguous, gapless,
//! order-preserving cover throughout.

use std::ops::Range;

use tracing::debug;

use crate::config::SegmenterConfig;
use crate::keywords::{keyword_union, KeywordSet};
use crate::similarity::jaccard;

/// Merge every segment smaller than `min_segment_size` into its most
/// lexically similar neighbor.
///
/// A small segment's keyword union is compared against the preceding and
/// following segments' unions; ties (and the no-signal case) fall back to
/// the preceding segment, or the following one when there is no
/// predecessor. Sizes are re-evaluated after each merge.
pub fn merge_small_segments(
    mut segments: Vec<Range<usize>>,
    keyword_sets: &[KeywordSet],
    config: &SegmenterConfig,
) -> Vec<Range<usize>> {
    loop {
        if segments.len() <= 1 {
            return segments;
        }

        let small = segments
            .iter()
            .position(|segment| segment.len() < config.min_segment_size);
        let Some(idx) = small else {
            return segments;
        };

        let into = choose_neighbor(&segments, idx, keyword_sets);
        debug!(
            segment = idx,
            neighbor = into,
            size = segments[idx].len(),
            "Merging undersized segment"
        );

        // Fuse the adjacent pair into one contiguous range.
        let (left, right) = if into < idx { (into, idx) } else { (idx, into) };
        let fused = segments[left].start..segments[right].end;
        segments[left] = fused;
        segments.remove(right);
    }
}

/// Pick the neighbor index to absorb the small segment at `idx`.
fn choose_neighbor(segments: &[Range<usize>], idx: usize, keyword_sets: &[KeywordSet]) -> usize {
    if idx == 0 {
        return 1;
    }
    if idx == segments.len() - 1 {
        return idx - 1;
    }

    let own = keyword_union(&keyword_sets[segments[idx].clone()]);
    let prev = keyword_union(&keyword_sets[segments[idx - 1].clone()]);
    let next = keyword_union(&keyword_sets[segments[idx + 1].clone()]);

    if jaccard(&own, &next) > jaccard(&own, &prev) {
        idx + 1
    } else {
        idx - 1
    }
}
