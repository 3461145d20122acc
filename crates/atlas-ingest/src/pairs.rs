//! Q/A pairing from the raw message graph.
//!
//! Flattens a conversation's mapping into time-ordered user/assistant
//! messages and pairs each user message with the assistant message that
//! follows it. Unanswered questions and unpaired assistant messages are
//! dropped.

use chrono::{DateTime, TimeZone, Utc};
use tracing::trace;

use atlas_types::{Conversation, QaPair};

use crate::export::RawConversation;

/// Convert export Unix seconds (fractional) to a timestamp.
fn timestamp_from_secs(secs: f64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt((secs * 1000.0) as i64).single()
}

struct FlatMessage {
    role_is_user: bool,
    text: String,
    create_time: Option<f64>,
}

/// Extract ordered Q/A pairs from a raw conversation.
pub fn extract_qa_pairs(raw: &RawConversation) -> Vec<QaPair> {
    let mut messages: Vec<FlatMessage> = raw
        .mapping
        .values()
        .filter_map(|node| node.message.as_ref())
        .filter_map(|message| {
            let role_is_user = match message.author.role.as_str() {
                "user" => true,
                "assistant" => false,
                _ => return None,
            };
            let text = message.content.text();
            if text.is_empty() {
                return None;
            }
            Some(FlatMessage {
                role_is_user,
                text,
                create_time: message.create_time,
            })
        })
        .collect();

    // Stable sort: equal or missing timestamps keep mapping-id order.
    messages.sort_by(|a, b| {
        a.create_time
            .unwrap_or(0.0)
            .total_cmp(&b.create_time.unwrap_or(0.0))
    });

    let mut qa_pairs = Vec::new();
    let mut pending_question: Option<FlatMessage> = None;

    for message in messages {
        if message.role_is_user {
            pending_question = Some(message);
        } else if let Some(question) = pending_question.take() {
            let mut pair = QaPair::new(question.text, message.text);
            pair.timestamp = question.create_time.and_then(timestamp_from_secs);
            qa_pairs.push(pair);
        }
    }

    trace!(pairs = qa_pairs.len(), "Extracted Q/A pairs");
    qa_pairs
}

/// Assemble a domain conversation from a raw one.
///
/// Returns `None` when no Q/A pairs could be extracted; such
/// conversations are skipped, never passed downstream.
pub fn conversation_from_raw(raw: &RawConversation) -> Option<Conversation> {
    let qa_pairs = extract_qa_pairs(raw);
    if qa_pairs.is_empty() {
        return None;
    }

    Some(Conversation {
        title: raw
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| "Untitled".to_string()),
        created: raw.create_time.and_then(timestamp_from_secs),
        updated: raw.update_time.and_then(timestamp_from_secs),
        qa_pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawConversation {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_pairs_user_then_assistant() {
        let conv = raw(
            r#"{
                "title": "Rust help",
                "mapping": {
                    "a": {"message": {"author": {"role": "user"}, "content": {"parts": ["How do I borrow?"]}, "create_time": 100.0}},
                    "b": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["Use references."]}, "create_time": 101.0}}
                }
            }"#,
        );

        let pairs = extract_qa_pairs(&conv);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "How do I borrow?");
        assert_eq!(pairs[0].answer, "Use references.");
        assert!(pairs[0].timestamp.is_some());
    }

    #[test]
    fn test_orders_by_create_time_not_mapping_order() {
        let conv = raw(
            r#"{
                "mapping": {
                    "z-answer": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["second"]}, "create_time": 200.0}},
                    "a-question": {"message": {"author": {"role": "user"}, "content": {"parts": ["first"]}, "create_time": 100.0}}
                }
            }"#,
        );

        let pairs = extract_qa_pairs(&conv);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "first");
    }

    #[test]
    fn test_skips_system_and_tool_messages() {
        let conv = raw(
            r#"{
                "mapping": {
                    "s": {"message": {"author": {"role": "system"}, "content": {"parts": ["preamble"]}, "create_time": 50.0}},
                    "u": {"message": {"author": {"role": "user"}, "content": {"parts": ["question"]}, "create_time": 100.0}},
                    "t": {"message": {"author": {"role": "tool"}, "content": {"parts": ["tool output"]}, "create_time": 101.0}},
                    "a": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["answer"]}, "create_time": 102.0}}
                }
            }"#,
        );

        let pairs = extract_qa_pairs(&conv);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].answer, "answer");
    }

    #[test]
    fn test_unanswered_question_dropped() {
        let conv = raw(
            r#"{
                "mapping": {
                    "u1": {"message": {"author": {"role": "user"}, "content": {"parts": ["answered"]}, "create_time": 100.0}},
                    "a1": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["reply"]}, "create_time": 101.0}},
                    "u2": {"message": {"author": {"role": "user"}, "content": {"parts": ["dangling"]}, "create_time": 102.0}}
                }
            }"#,
        );

        let pairs = extract_qa_pairs(&conv);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "answered");
    }

    #[test]
    fn test_consecutive_user_messages_keep_latest() {
        let conv = raw(
            r#"{
                "mapping": {
                    "u1": {"message": {"author": {"role": "user"}, "content": {"parts": ["superseded"]}, "create_time": 100.0}},
                    "u2": {"message": {"author": {"role": "user"}, "content": {"parts": ["actual question"]}, "create_time": 101.0}},
                    "a": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["reply"]}, "create_time": 102.0}}
                }
            }"#,
        );

        let pairs = extract_qa_pairs(&conv);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].question, "actual question");
    }

    #[test]
    fn test_empty_conversation_skipped() {
        let conv = raw(r#"{"title": "empty", "mapping": {}}"#);
        assert!(conversation_from_raw(&conv).is_none());
    }

    #[test]
    fn test_untitled_fallback() {
        let conv = raw(
            r#"{
                "mapping": {
                    "u": {"message": {"author": {"role": "user"}, "content": {"parts": ["q"]}, "create_time": 100.0}},
                    "a": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["a"]}, "create_time": 101.0}}
                }
            }"#,
        );

        let conversation = conversation_from_raw(&conv).unwrap();
        assert_eq!(conversation.title, "Untitled");
    }

    #[test]
    fn test_metadata_carried_through() {
        let conv = raw(
            r#"{
                "title": "Meta",
                "create_time": 1000.5,
                "update_time": 2000.5,
                "mapping": {
                    "u": {"message": {"author": {"role": "user"}, "content": {"parts": ["q"]}, "create_time": 1000.5}},
                    "a": {"message": {"author": {"role": "assistant"}, "content": {"parts": ["a"]}, "create_time": 1001.0}}
                }
            }"#,
        );

        let conversation = conversation_from_raw(&conv).unwrap();
        assert!(conversation.created.is_some());
        assert!(conversation.updated.is_some());
    }
}
