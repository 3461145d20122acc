//! Raw export parsing.
//!
//! The ChatGPT HTML export embeds the full conversation array as
//! `var jsonData = [...]`. The array is located with a string-aware
//! bracket scan, then parsed with serde. A bare `.json` input holding the
//! same array is accepted directly.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::IngestError;

const JSON_DATA_MARKER: &str = "var jsonData = ";

/// One conversation as exported, before Q/A pairing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConversation {
    /// Export title, absent for some conversations
    #[serde(default)]
    pub title: Option<String>,

    /// Creation time, Unix seconds
    #[serde(default)]
    pub create_time: Option<f64>,

    /// Last update time, Unix seconds
    #[serde(default)]
    pub update_time: Option<f64>,

    /// Message graph keyed by node id. BTreeMap so traversal order is
    /// deterministic for nodes without timestamps.
    #[serde(default)]
    pub mapping: BTreeMap<String, RawNode>,
}

/// One node of the message graph.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    /// The message, absent for structural nodes (root, system stubs)
    #[serde(default)]
    pub message: Option<RawMessage>,
}

/// One exported message.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub author: RawAuthor,

    #[serde(default)]
    pub content: RawContent,

    /// Message time, Unix seconds
    #[serde(default)]
    pub create_time: Option<f64>,
}

/// Message author.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthor {
    /// "user", "assistant", "system", or "tool"
    #[serde(default)]
    pub role: String,
}

/// Message content. Non-text parts (images, code execution blobs) appear
/// as non-string JSON values and are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawContent {
    #[serde(default)]
    pub parts: Vec<serde_json::Value>,
}

impl RawContent {
    /// Join the non-empty string parts with newlines.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| part.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Slice the embedded `jsonData` array out of the export HTML.
///
/// Scans brackets outside string literals, honoring escapes, until the
/// opening `[` closes.
pub fn extract_json_array(html: &str) -> Result<&str, IngestError> {
    let start = html
        .find(JSON_DATA_MARKER)
        .ok_or(IngestError::MarkerNotFound)?
        + JSON_DATA_MARKER.len();
    let body = &html[start..];

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '[' if !in_string => depth += 1,
            ']' if !in_string => {
                if depth == 0 {
                    return Err(IngestError::UnterminatedArray);
                }
                depth -= 1;
                if depth == 0 {
                    return Ok(&body[..=idx]);
                }
            }
            _ => {}
        }
    }

    Err(IngestError::UnterminatedArray)
}

/// Parse export content, either HTML with an embedded array or the bare array.
pub fn parse_export(content: &str) -> Result<Vec<RawConversation>, IngestError> {
    let json = if content.trim_start().starts_with('[') {
        content.trim_start()
    } else {
        extract_json_array(content)?
    };

    let conversations: Vec<RawConversation> = serde_json::from_str(json)?;
    debug!(conversations = conversations.len(), "Parsed export");
    Ok(conversations)
}
