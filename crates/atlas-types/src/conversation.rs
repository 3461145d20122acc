//! Conversation and Q/A pair types.
//!
//! Pairs are immutable once produced by ingestion. Their order within a
//! conversation is conversation time order and must never be reshuffled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user question and the assistant answer that followed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    /// User message text (may be empty, never absent)
    pub question: String,

    /// Assistant message text (may be empty, never absent)
    pub answer: String,

    /// Time the question was asked, when the export carried one
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl QaPair {
    /// Create a pair without a timestamp.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            timestamp: None,
        }
    }

    /// Attach a timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// An ordered sequence of Q/A pairs plus export metadata.
///
/// The segmentation core reads only `qa_pairs`; metadata passes through
/// to the archive unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Export title ("Untitled" when the export had none)
    pub title: String,

    /// Conversation creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Q/A pairs in conversation time order
    pub qa_pairs: Vec<QaPair>,
}

impl Conversation {
    /// Create a conversation from a title and its ordered pairs.
    pub fn new(title: impl Into<String>, qa_pairs: Vec<QaPair>) -> Self {
        Self {
            title: title.into(),
            created: None,
            updated: None,
            qa_pairs,
        }
    }

    /// Number of Q/A pairs.
    pub fn len(&self) -> usize {
        self.qa_pairs.len()
    }

    /// True when the conversation carries no pairs.
    pub fn is_empty(&self) -> bool {
        self.qa_pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pair_roundtrip() {
        let pair = QaPair::new("How do I sort a Vec?", "Use the sort method.")
            .with_timestamp(Utc.timestamp_opt(1_700_000_000, 0).unwrap());

        let json = serde_json::to_string(&pair).unwrap();
        let parsed: QaPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, parsed);
    }

    #[test]
    fn test_pair_timestamp_optional() {
        let parsed: QaPair =
            serde_json::from_str(r#"{"question":"hi","answer":"hello"}"#).unwrap();
        assert!(parsed.timestamp.is_none());
    }

    #[test]
    fn test_conversation_len() {
        let conv = Conversation::new("Rust help", vec![QaPair::new("q", "a")]);
        assert_eq!(conv.len(), 1);
        assert!(!conv.is_empty());
    }
}
