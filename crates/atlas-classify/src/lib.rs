//! # atlas-classify
//!
//! Broad-category classification for chat-atlas.
//!
//! An independent keyword/pattern matcher applied per conversation title,
//! orthogonal to topic segmentation. Rule tables are immutable
//! configuration data compiled once at construction.
//!
//! ## Usage
//!
//! ```rust
//! use atlas_classify::CategoryClassifier;
//!
//! let classifier = CategoryClassifier::with_defaults();
//! let result = classifier.classify("Python Flask API setup");
//! assert_eq!(result.category, "Tech & Development");
//! ```

pub mod classifier;
pub mod config;
pub mod error;

pub use classifier::{CategoryClassifier, Classification};
pub use config::{CategoryRule, ClassifierConfig};
pub use error::ClassifyError;
