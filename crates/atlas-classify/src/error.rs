//! Classifier error types.

use thiserror::Error;

/// Errors that can occur building a classifier.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A category rule carried an invalid regex pattern
    #[error("Invalid pattern in category '{category}': {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },
}
