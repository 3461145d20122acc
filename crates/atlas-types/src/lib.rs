//! # atlas-types
//!
//! Shared domain types for chat-atlas.
//!
//! This crate defines the core data structures used throughout the system:
//! - Q/A pairs: the atomic unit of conversation content
//! - Conversations: ordered Q/A pair sequences with export metadata
//! - Topics: contiguous, lexically coherent runs of Q/A pairs
//! - Archive: the categorized hierarchy written as the final artifact
//!
//! ## Usage
//!
//! ```rust
//! use atlas_types::{Conversation, QaPair, Topic};
//! ```

pub mod archive;
pub mod conversation;
pub mod topic;

pub use archive::{Archive, ArchiveSummary, CategoryEntry, ConversationRecord};
pub use conversation::{Conversation, QaPair};
pub use topic::Topic;
