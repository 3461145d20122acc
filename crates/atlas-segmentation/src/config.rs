//! Segmenter configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for topic segmentation.
///
/// Defaults are deliberately conservative: boundaries require sustained
/// lexical drift, so a single off-topic pair never fractures a topic.
/// Lowering `similarity_threshold` yields fewer, larger topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Similarity below this marks a candidate boundary
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f32,

    /// Minimum pairs since the last boundary before a new one may be emitted
    #[serde(default = "default_min_run_length")]
    pub min_run_length: usize,

    /// Segments smaller than this are merged into a neighbor
    #[serde(default = "default_min_segment_size")]
    pub min_segment_size: usize,

    /// Conversations at or below this size skip detection and form one topic
    #[serde(default = "default_min_conversation_size")]
    pub min_conversation_size: usize,

    /// Keywords joined into a topic's display name
    #[serde(default = "default_top_keywords_per_name")]
    pub top_keywords_per_name: usize,

    /// Pairs of rolling context the boundary detector compares against
    #[serde(default = "default_context_window")]
    pub context_window: usize,

    /// Top-ranked keywords kept per pair
    #[serde(default = "default_max_keywords_per_pair")]
    pub max_keywords_per_pair: usize,

    /// Tokens shorter than this are dropped
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,

    /// Answer tokens considered per pair, so long answers do not drown
    /// the question signal
    #[serde(default = "default_max_answer_tokens")]
    pub max_answer_tokens: usize,
}

fn default_similarity_threshold() -> f32 {
    0.05
}
fn default_min_run_length() -> usize {
    2
}
fn default_min_segment_size() -> usize {
    2
}
fn default_min_conversation_size() -> usize {
    5
}
fn default_top_keywords_per_name() -> usize {
    3
}
fn default_context_window() -> usize {
    5
}
fn default_max_keywords_per_pair() -> usize {
    12
}
fn default_min_token_length() -> usize {
    3
}
fn default_max_answer_tokens() -> usize {
    50
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            min_run_length: default_min_run_length(),
            min_segment_size: default_min_segment_size(),
            min_conversation_size: default_min_conversation_size(),
            top_keywords_per_name: default_top_keywords_per_name(),
            context_window: default_context_window(),
            max_keywords_per_pair: default_max_keywords_per_pair(),
            min_token_length: default_min_token_length(),
            max_answer_tokens: default_max_answer_tokens(),
        }
    }
}

impl SegmenterConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(format!(
                "similarity_threshold must be 0.0-1.0, got {}",
                self.similarity_threshold
            ));
        }
        if self.min_run_length == 0 {
            return Err("min_run_length must be > 0".to_string());
        }
        if self.context_window == 0 {
            return Err("context_window must be > 0".to_string());
        }
        if self.top_keywords_per_name == 0 {
            return Err("top_keywords_per_name must be > 0".to_string());
        }
        if self.max_keywords_per_pair == 0 {
            return Err("max_keywords_per_pair must be > 0".to_string());
        }
        Ok(())
    }
}
