//! # atlas-ingest
//!
//! Export ingestion for chat-atlas.
//!
//! Reads a ChatGPT export (`chat.html` with an embedded `jsonData` array,
//! or the bare conversations JSON) and produces ordered [`Conversation`]s
//! of Q/A pairs for downstream classification and segmentation.
//!
//! Conversations that yield no Q/A pairs are skipped; they are a normal
//! data state of exports, not an error.

use std::fs;
use std::path::Path;

use tracing::info;

use atlas_types::Conversation;

pub mod error;
pub mod export;
pub mod pairs;

pub use error::IngestError;
pub use export::{parse_export, RawConversation};
pub use pairs::{conversation_from_raw, extract_qa_pairs};

/// Load an export file and assemble its conversations, sorted by
/// creation time (missing times first).
pub fn load_export(path: &Path) -> Result<Vec<Conversation>, IngestError> {
    let content = fs::read_to_string(path)?;
    let raw = parse_export(&content)?;

    let mut conversations: Vec<Conversation> =
        raw.iter().filter_map(conversation_from_raw).collect();
    conversations.sort_by_key(|c| c.created);

    info!(
        path = %path.display(),
        raw = raw.len(),
        conversations = conversations.len(),
        "Loaded export"
    );

    Ok(conversations)
}
