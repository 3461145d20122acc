//! Topic naming.
//!
//! Derives a short display name from a final segment's aggregated
//! keywords. The ranking is recomputed over the whole segment's token
//! stream rather than carried incrementally, so early pairs get no bias.

use atlas_types::QaPair;

use crate::config::SegmenterConfig;
use crate::keywords::{pair_tokens, rank_tokens};

/// Name used when a segment yields no keywords at all.
pub const FALLBACK_TOPIC_NAME: &str = "General Discussion";

/// Produce a display name for a segment of pairs.
///
/// Takes the top `top_keywords_per_name` keywords of the segment,
/// title-cases them, and joins with " & ". Never returns an empty name.
pub fn topic_name(pairs: &[QaPair], config: &SegmenterConfig) -> String {
    let mut tokens = Vec::new();
    for pair in pairs {
        tokens.extend(pair_tokens(pair, config));
    }

    let ranked = rank_tokens(&tokens);
    if ranked.is_empty() {
        return FALLBACK_TOPIC_NAME.to_string();
    }

    ranked
        .iter()
        .take(config.top_keywords_per_name)
        .map(|keyword| title_case(keyword))
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Uppercase the first character of an already-lowercased token.
fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
