//! Command handlers for the chat-atlas binary.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use atlas_classify::CategoryClassifier;
use atlas_ingest::load_export;
use atlas_segmentation::Segmenter;
use atlas_types::{Archive, ArchiveSummary, Conversation, ConversationRecord};

use crate::settings::Settings;

/// Initialize the tracing subscriber. RUST_LOG overrides the configured
/// level.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Classify and segment every conversation into the archive hierarchy.
pub fn build_archive(
    conversations: &[Conversation],
    classifier: &CategoryClassifier,
    segmenter: &Segmenter,
) -> Result<Archive> {
    let mut archive = Archive {
        summary: ArchiveSummary::default(),
        hierarchy: Default::default(),
    };

    for conversation in conversations {
        let classification = classifier.classify(&conversation.title);
        let topics = segmenter
            .segment(&conversation.qa_pairs)
            .with_context(|| format!("Segmenting '{}'", conversation.title))?;

        let record = ConversationRecord {
            title: conversation.title.clone(),
            created: conversation.created,
            updated: conversation.updated,
            category_confidence: classification.confidence,
            qa_count: conversation.len(),
            topics,
        };

        archive
            .hierarchy
            .entry(classification.category)
            .or_default()
            .sub_categories
            .entry(conversation.title.clone())
            .or_default()
            .push(record);
    }

    archive.rebuild_summary();
    Ok(archive)
}

/// Run the full pipeline: ingest -> classify -> segment -> write archive.
pub fn handle_build(settings: &Settings, input: &Path, output: &Path, pretty: bool) -> Result<()> {
    let classifier = CategoryClassifier::new(settings.classifier.clone())
        .context("Invalid classifier configuration")?;
    let segmenter = Segmenter::new(settings.segmentation.clone())
        .context("Invalid segmentation configuration")?;

    info!(input = %input.display(), "Reading export");
    let conversations = load_export(input)
        .with_context(|| format!("Reading export {}", input.display()))?;

    info!(conversations = conversations.len(), "Building archive");
    let archive = build_archive(&conversations, &classifier, &segmenter)?;

    let json = if pretty {
        serde_json::to_string_pretty(&archive)?
    } else {
        serde_json::to_string(&archive)?
    };
    fs::write(output, json).with_context(|| format!("Writing {}", output.display()))?;

    info!(output = %output.display(), "Archive written");

    let summary = &archive.summary;
    println!("Done! Summary:");
    println!("  Categories: {}", summary.total_categories);
    println!("  Conversations: {}", summary.total_conversations);
    println!("  Q/A pairs: {}", summary.total_qa_pairs);
    println!("  Topics: {}", summary.total_topics);
    println!(
        "  Conversations with multiple topics: {}",
        summary.conversations_with_multiple_topics
    );

    Ok(())
}

/// Segment one conversation from an export and print its topics.
pub fn handle_topics(settings: &Settings, input: &Path, title: &str) -> Result<()> {
    let segmenter = Segmenter::new(settings.segmentation.clone())
        .context("Invalid segmentation configuration")?;

    let conversations = load_export(input)
        .with_context(|| format!("Reading export {}", input.display()))?;

    let Some(conversation) = conversations.iter().find(|c| c.title == title) else {
        bail!("No conversation titled '{title}' in {}", input.display());
    };

    let topics = segmenter.segment(&conversation.qa_pairs)?;

    println!("Conversation: {} ({} Q/A pairs)", conversation.title, conversation.len());
    for (idx, topic) in topics.iter().enumerate() {
        println!("  Topic {}: {} ({} Q/A pairs)", idx + 1, topic.name, topic.len());
    }

    Ok(())
}
