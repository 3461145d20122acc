//! Segmentation error types.

use thiserror::Error;

/// Errors that can occur during segmentation.
///
/// Absence of keywords or similarity signal is modeled as data (empty
/// sets, zero scores), not as errors. The empty-conversation case is the
/// exception: it signals an upstream extraction defect.
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// Conversation arrived with zero pairs, violating the input contract
    #[error("Conversation has no Q/A pairs; upstream extraction should have skipped it")]
    EmptyConversation,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
