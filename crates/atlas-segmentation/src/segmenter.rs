//! Segmentation orchestrator.
//!
//! Runs the full pipeline for one conversation: keyword extraction ->
//! boundary detection -> merge pass -> naming. A pure function of the
//! pair sequence and the configuration; no cross-conversation state, so
//! conversations can be processed independently in any order.

use atlas_types::{QaPair, Topic};
use tracing::debug;

use crate::boundary::detect_segments;
use crate::config::SegmenterConfig;
use crate::error::SegmentationError;
use crate::keywords::pair_keywords;
use crate::merge::merge_small_segments;
use crate::naming::topic_name;

/// Topic segmenter for a single conversation's pair sequence.
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a segmenter, validating the configuration.
    pub fn new(config: SegmenterConfig) -> Result<Self, SegmentationError> {
        config
            .validate()
            .map_err(SegmentationError::InvalidConfig)?;
        Ok(Self { config })
    }

    /// Create a segmenter with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SegmenterConfig::default(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment an ordered pair sequence into named topics.
    ///
    /// The topics cover the input exactly: concatenating their pairs in
    /// order reproduces the sequence with nothing dropped, duplicated, or
    /// reordered. A zero-pair conversation is a contract violation from
    /// upstream extraction and fails fast.
    pub fn segment(&self, qa_pairs: &[QaPair]) -> Result<Vec<Topic>, SegmentationError> {
        if qa_pairs.is_empty() {
            return Err(SegmentationError::EmptyConversation);
        }

        // Trivial conversations carry too little signal to distinguish
        // topics from noise: one topic, no detection.
        if qa_pairs.len() <= self.config.min_conversation_size {
            debug!(
                pairs = qa_pairs.len(),
                "Conversation below minimum size, single topic"
            );
            return Ok(vec![Topic::new(
                topic_name(qa_pairs, &self.config),
                qa_pairs.to_vec(),
            )]);
        }

        let keyword_sets: Vec<_> = qa_pairs
            .iter()
            .map(|pair| pair_keywords(pair, &self.config))
            .collect();

        let raw = detect_segments(&keyword_sets, &self.config);
        let merged = merge_small_segments(raw, &keyword_sets, &self.config);

        debug!(pairs = qa_pairs.len(), topics = merged.len(), "Segmented conversation");

        Ok(merged
            .into_iter()
            .map(|segment| {
                let pairs = &qa_pairs[segment];
                Topic::new(topic_name(pairs, &self.config), pairs.to_vec())
            })
            .collect())
    }
}

/// Segment a pair sequence with the given configuration.
pub fn segment_conversation(
    qa_pairs: &[QaPair],
    config: &SegmenterConfig,
) -> Result<Vec<Topic>, SegmentationError> {
    Segmenter::new(config.clone())?.segment(qa_pairs)
}
