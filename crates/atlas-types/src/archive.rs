//! Archive output model.
//!
//! The final artifact is a hierarchy: broad category -> sub-category
//! (conversation title) -> conversation records, each carrying its
//! segmented topics. BTreeMap keys keep serialization order stable so
//! identical inputs produce byte-identical archives.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Topic;

/// The complete categorized archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archive {
    /// Corpus-level statistics
    pub summary: ArchiveSummary,

    /// Broad category name -> category contents
    pub hierarchy: BTreeMap<String, CategoryEntry>,
}

/// Contents of one broad category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Sub-category (conversation title) -> conversations sharing it
    pub sub_categories: BTreeMap<String, Vec<ConversationRecord>>,
}

/// One conversation in the archive, with its segmented topics.
///
/// The topics fully cover the conversation's pairs, so the flat pair list
/// is not repeated here; `qa_count` records its length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Export title
    pub title: String,

    /// Conversation creation time
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// Last update time
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Classifier confidence for the broad category assignment
    pub category_confidence: f32,

    /// Total Q/A pairs across all topics
    pub qa_count: usize,

    /// Segmented topics in conversation order
    pub topics: Vec<Topic>,
}

/// Corpus-level statistics for the archive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveSummary {
    /// Number of broad categories present
    pub total_categories: usize,

    /// Number of conversations archived
    pub total_conversations: usize,

    /// Number of Q/A pairs across all conversations
    pub total_qa_pairs: usize,

    /// Number of topics across all conversations
    pub total_topics: usize,

    /// Conversations that segmented into more than one topic
    pub conversations_with_multiple_topics: usize,

    /// Broad category names, in hierarchy order
    pub categories: Vec<String>,
}

impl Archive {
    /// Recompute the summary block from the hierarchy.
    pub fn rebuild_summary(&mut self) {
        let mut summary = ArchiveSummary::default();
        summary.total_categories = self.hierarchy.len();
        summary.categories = self.hierarchy.keys().cloned().collect();

        for entry in self.hierarchy.values() {
            for records in entry.sub_categories.values() {
                for record in records {
                    summary.total_conversations += 1;
                    summary.total_qa_pairs += record.qa_count;
                    summary.total_topics += record.topics.len();
                    if record.topics.len() > 1 {
                        summary.conversations_with_multiple_topics += 1;
                    }
                }
            }
        }

        self.summary = summary;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QaPair;

    fn record(title: &str, topics: Vec<Topic>) -> ConversationRecord {
        let qa_count = topics.iter().map(|t| t.len()).sum();
        ConversationRecord {
            title: title.to_string(),
            created: None,
            updated: None,
            category_confidence: 0.5,
            qa_count,
            topics,
        }
    }

    #[test]
    fn test_rebuild_summary() {
        let mut archive = Archive {
            summary: ArchiveSummary::default(),
            hierarchy: BTreeMap::new(),
        };

        let single = Topic::new("Rust", vec![QaPair::new("q", "a")]);
        let multi = vec![
            Topic::new("Rust", vec![QaPair::new("q1", "a1"), QaPair::new("q2", "a2")]),
            Topic::new("Python", vec![QaPair::new("q3", "a3")]),
        ];

        let mut entry = CategoryEntry::default();
        entry
            .sub_categories
            .insert("Rust help".to_string(), vec![record("Rust help", vec![single])]);
        entry
            .sub_categories
            .insert("Mixed".to_string(), vec![record("Mixed", multi)]);
        archive.hierarchy.insert("Tech & Development".to_string(), entry);

        archive.rebuild_summary();

        assert_eq!(archive.summary.total_categories, 1);
        assert_eq!(archive.summary.total_conversations, 2);
        assert_eq!(archive.summary.total_qa_pairs, 4);
        assert_eq!(archive.summary.total_topics, 3);
        assert_eq!(archive.summary.conversations_with_multiple_topics, 1);
        assert_eq!(archive.summary.categories, vec!["Tech & Development"]);
    }
}
