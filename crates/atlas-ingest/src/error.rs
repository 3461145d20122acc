//! Ingestion error types.

use thiserror::Error;

/// Errors that can occur reading a chat export.
#[derive(Debug, Error)]
pub enum IngestError {
    /// I/O error reading the export file
    #[error("Failed to read export: {0}")]
    Io(#[from] std::io::Error),

    /// The HTML export carried no embedded conversation array
    #[error("Could not find the jsonData array in the export HTML")]
    MarkerNotFound,

    /// The embedded conversation array never closed
    #[error("Embedded jsonData array is unterminated")]
    UnterminatedArray,

    /// Malformed conversation JSON
    #[error("Failed to parse conversations: {0}")]
    Json(#[from] serde_json::Error),
}
