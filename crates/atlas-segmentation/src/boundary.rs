//! Topic boundary detection.
//!
//! Scans consecutive pairs and compares each against a rolling context
//! built from the current segment's recent keywords. A boundary is only
//! emitted when similarity drops below the threshold AND the segment has
//! accumulated at least `min_run_length` pairs AND the conversation is
//! large enough to carry signal at all. One low-similarity outlier never
//! fractures a topic.
//!
//! Implemented as a pure fold over the pair sequence; the accumulator is
//! the partition built so far plus the current segment start.

use std::ops::Range;

use tracing::{debug, trace};

use crate::config::SegmenterConfig;
use crate::keywords::{keyword_union, KeywordSet};
use crate::similarity::jaccard;

/// Fold accumulator: completed segments plus the open segment's start.
struct Detection {
    segments: Vec<Range<usize>>,
    start: usize,
}

/// Partition `[0, N)` into contiguous candidate segments.
///
/// Pair 0 always starts the first segment; the end of the sequence closes
/// the final segment regardless of its length (undersized segments are
/// the merger's concern). Returns an empty partition for empty input.
pub fn detect_segments(
    keyword_sets: &[KeywordSet],
    config: &SegmenterConfig,
) -> Vec<Range<usize>> {
    let total = keyword_sets.len();
    if total == 0 {
        return Vec::new();
    }

    let mut state = (1..total).fold(
        Detection {
            segments: Vec::new(),
            start: 0,
        },
        |mut state, i| {
            // Rolling context: union of the last `context_window` pairs,
            // clamped to the current segment.
            let window_start = i.saturating_sub(config.context_window).max(state.start);
            let context = keyword_union(&keyword_sets[window_start..i]);
            let similarity = jaccard(&context, &keyword_sets[i]);
            let run_length = i - state.start;

            trace!(pair = i, similarity, run_length, "Evaluated pair");

            if similarity < config.similarity_threshold
                && run_length >= config.min_run_length
                && total > config.min_conversation_size
            {
                debug!(
                    pair = i,
                    similarity,
                    threshold = config.similarity_threshold,
                    "Topic boundary detected"
                );
                state.segments.push(state.start..i);
                state.start = i;
            }
            state
        },
    );

    state.segments.push(state.start..total);
    state.segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn config() -> SegmenterConfig {
        SegmenterConfig::default()
    }

    #[test]
    fn test_empty_input_yields_empty_partition() {
        assert!(detect_segments(&[], &config()).is_empty());
    }

    #[test]
    fn test_single_pair_single_segment() {
        let sets = vec![set(&["rust"])];
        assert_eq!(detect_segments(&sets, &config()), vec![0..1]);
    }

    #[test]
    fn test_coherent_conversation_stays_whole() {
        let sets: Vec<KeywordSet> = (0..8).map(|_| set(&["rust", "cargo", "crate"])).collect();
        assert_eq!(detect_segments(&sets, &config()), vec![0..8]);
    }

    #[test]
    fn test_clean_shift_splits_once() {
        let mut sets: Vec<KeywordSet> =
            (0..4).map(|_| set(&["react", "native", "setup"])).collect();
        sets.extend((0..4).map(|_| set(&["python", "flask", "api"])));

        assert_eq!(detect_segments(&sets, &config()), vec![0..4, 4..8]);
    }

    #[test]
    fn test_small_conversation_never_splits() {
        // Two disjoint halves, but only 4 pairs total: below the
        // minimum conversation size, detection is suppressed.
        let mut sets: Vec<KeywordSet> = (0..2).map(|_| set(&["react", "native"])).collect();
        sets.extend((0..2).map(|_| set(&["python", "flask"])));

        assert_eq!(detect_segments(&sets, &config()), vec![0..4]);
    }

    #[test]
    fn test_outlier_at_run_start_does_not_split() {
        // Boundary candidate at pair 1 fails the run-length guard.
        let mut sets = vec![set(&["rust", "cargo"])];
        sets.push(set(&["gardening", "tomatoes"]));
        sets.extend((0..5).map(|_| set(&["rust", "cargo"])));

        let segments = detect_segments(&sets, &config());
        assert_eq!(segments, vec![0..7]);
    }

    #[test]
    fn test_partition_covers_input() {
        let mut sets: Vec<KeywordSet> = (0..5).map(|_| set(&["alpha", "beta"])).collect();
        sets.extend((0..5).map(|_| set(&["gamma", "delta"])));
        sets.extend((0..5).map(|_| set(&["epsilon", "zeta"])));

        let segments = detect_segments(&sets, &config());
        let mut expected_start = 0;
        for segment in &segments {
            assert_eq!(segment.start, expected_start);
            expected_start = segment.end;
        }
        assert_eq!(expected_start, sets.len());
    }
}
