//! # atlas-segmentation
//!
//! Topic segmentation engine for chat-atlas.
//!
//! Decides, within one conversation's ordered Q/A pairs, where one
//! subject ends and another begins, and names each resulting topic.
//! Deliberately lexical: stopword-filtered keyword overlap rather than
//! embeddings, so results are reproducible and require no model
//! downloads.
//!
//! ## Pipeline
//!
//! ordered pairs -> keyword sets -> similarity sequence -> boundary
//! indices -> merged segments -> named topics
//!
//! ## Modules
//!
//! - [`keywords`]: stopword-filtered, frequency/length-ranked extraction
//! - [`similarity`]: Jaccard overlap between keyword sets
//! - [`boundary`]: threshold-based boundary detection over a rolling context
//! - [`merge`]: absorbs undersized segments into their closest neighbor
//! - [`naming`]: display names from aggregated top keywords
//! - [`segmenter`]: per-conversation orchestration
//!
//! ## Usage
//!
//! ```rust
//! use atlas_segmentation::Segmenter;
//! use atlas_types::QaPair;
//!
//! let segmenter = Segmenter::with_defaults();
//! let pairs = vec![QaPair::new("How do lifetimes work?", "They bound borrows.")];
//! let topics = segmenter.segment(&pairs).unwrap();
//! assert_eq!(topics.len(), 1);
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod keywords;
pub mod merge;
pub mod naming;
pub mod segmenter;
pub mod similarity;

pub use boundary::detect_segments;
pub use config::SegmenterConfig;
pub use error::SegmentationError;
pub use keywords::{pair_keywords, ranked_keywords, KeywordSet};
pub use merge::merge_small_segments;
pub use naming::{topic_name, FALLBACK_TOPIC_NAME};
pub use segmenter::{segment_conversation, Segmenter};
pub use similarity::jaccard;
