//! Topic type produced by segmentation.

use serde::{Deserialize, Serialize};

use crate::QaPair;

/// A contiguous run of Q/A pairs judged lexically coherent.
///
/// Topics are derived data with no identity across runs: re-segmenting the
/// same conversation with the same configuration reproduces them exactly.
/// Concatenating a conversation's topics in order reproduces its pair
/// sequence with nothing dropped, duplicated, or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Display name derived from the segment's top keywords (never empty)
    pub name: String,

    /// The pairs covered by this topic, in conversation order
    pub qa_pairs: Vec<QaPair>,
}

impl Topic {
    /// Create a topic.
    pub fn new(name: impl Into<String>, qa_pairs: Vec<QaPair>) -> Self {
        Self {
            name: name.into(),
            qa_pairs,
        }
    }

    /// Number of pairs covered.
    pub fn len(&self) -> usize {
        self.qa_pairs.len()
    }

    /// True when the topic covers no pairs.
    pub fn is_empty(&self) -> bool {
        self.qa_pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_roundtrip() {
        let topic = Topic::new("React & Native & Setup", vec![QaPair::new("q", "a")]);
        let json = serde_json::to_string(&topic).unwrap();
        let parsed: Topic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "React & Native & Setup");
        assert_eq!(parsed.len(), 1);
    }
}
