//! Keyword extraction from Q/A pair text.
//!
//! Turns free text into a compact set of salient terms: lowercase,
//! tokenize on word boundaries, drop stopwords and short tokens, rank by
//! frequency then length then first occurrence, keep the top K. The
//! ranking is a fixed contract: identical text always yields identical
//! keywords regardless of hash iteration order.

use std::collections::{BTreeSet, HashMap};

use atlas_types::QaPair;

use crate::config::SegmenterConfig;

/// A set of normalized keyword tokens. Ordered so iteration (and hence
/// unions, names, and serialized output) is deterministic.
pub type KeywordSet = BTreeSet<String>;

/// Split text into lowercase alphabetic tokens, dropping stopwords and
/// tokens shorter than `min_token_length`. Order and repetition of the
/// source text are preserved.
pub fn tokenize(text: &str, min_token_length: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphabetic())
        .filter(|s| !s.is_empty())
        .filter(|s| s.chars().count() >= min_token_length)
        .filter(|s| !is_stop_word(s))
        .map(String::from)
        .collect()
}

/// Rank tokens by frequency descending, then token length descending,
/// then first-occurrence index ascending.
///
/// Longer, repeated domain terms outrank short common words; ties resolve
/// by source order, never by hash order.
pub fn rank_tokens(tokens: &[String]) -> Vec<String> {
    let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, token) in tokens.iter().enumerate() {
        let entry = stats.entry(token.as_str()).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = stats
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.0.chars().count().cmp(&a.0.chars().count()))
            .then_with(|| a.2.cmp(&b.2))
    });

    ranked.into_iter().map(|(token, _, _)| token.to_string()).collect()
}

/// Rank the keywords of a piece of text. Empty text yields an empty list.
pub fn ranked_keywords(text: &str, min_token_length: usize) -> Vec<String> {
    rank_tokens(&tokenize(text, min_token_length))
}

/// Collect the token stream of one pair: all question tokens plus a
/// capped prefix of answer tokens, so long answers do not drown the
/// question signal.
pub fn pair_tokens(pair: &QaPair, config: &SegmenterConfig) -> Vec<String> {
    let mut tokens = tokenize(&pair.question, config.min_token_length);
    tokens.extend(
        tokenize(&pair.answer, config.min_token_length)
            .into_iter()
            .take(config.max_answer_tokens),
    );
    tokens
}

/// Extract the keyword set of one pair: its top-ranked tokens.
pub fn pair_keywords(pair: &QaPair, config: &SegmenterConfig) -> KeywordSet {
    rank_tokens(&pair_tokens(pair, config))
        .into_iter()
        .take(config.max_keywords_per_pair)
        .collect()
}

/// Union of several keyword sets.
pub fn keyword_union<'a, I>(sets: I) -> KeywordSet
where
    I: IntoIterator<Item = &'a KeywordSet>,
{
    let mut union = KeywordSet::new();
    for set in sets {
        union.extend(set.iter().cloned());
    }
    union
}

/// Check if a word is a stop word.
fn is_stop_word(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "about", "above", "actually", "after", "again", "against", "ain", "all", "also", "and",
        "any", "anyone", "anything", "are", "aren", "back", "basically", "because", "been",
        "before", "being", "below", "between", "but", "can", "come", "could", "couldn", "did",
        "didn", "does", "doesn", "doing", "don", "down", "during", "each", "even", "everyone",
        "everything", "few", "first", "for", "from", "further", "get", "give", "going", "good",
        "got", "great", "had", "hadn", "has", "hasn", "have", "haven", "having", "her", "here",
        "hers", "herself", "him", "himself", "his", "how", "into", "isn", "its", "itself",
        "just", "know", "let", "like", "look", "made", "make", "many", "may", "might", "mightn",
        "more", "most", "much", "must", "mustn", "myself", "need", "needn", "nor", "not",
        "nothing", "now", "off", "okay", "once", "one", "only", "other", "our", "ours",
        "ourselves", "out", "over", "own", "part", "please", "put", "really", "right", "said",
        "same", "say", "see", "shall", "shan", "she", "should", "shouldn", "some", "someone",
        "something", "still", "such", "sure", "take", "than", "thank", "thanks", "that", "the",
        "their", "theirs", "them", "themselves", "then", "there", "these", "they", "thing",
        "things", "think", "this", "those", "through", "time", "too", "try", "trying", "two",
        "under", "until", "use", "used", "using", "very", "want", "was", "wasn", "way", "well",
        "were", "weren", "what", "when", "where", "which", "while", "who", "whom", "why",
        "will", "with", "won", "would", "wouldn", "yeah", "yes", "you", "your", "yours",
        "yourself", "yourselves",
    ];

    STOP_WORDS.contains(&word)
}
