//! Broad-category classification of conversation titles.
//!
//! Keyword/pattern scoring, applied per conversation and orthogonal to
//! topic segmentation: +2 per contained keyword, +1 extra when the title
//! starts with the keyword, +1 per matching regex pattern. The best
//! scoring category wins; everything-zero falls back to the configured
//! miscellaneous category.

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{CategoryRule, ClassifierConfig};
use crate::error::ClassifyError;

/// Result of classifying one conversation title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Assigned broad category
    pub category: String,

    /// Confidence score (0.0-1.0): best score over total score
    pub confidence: f32,

    /// Keywords that influenced the classification
    pub matched_keywords: Vec<String>,
}

/// One rule with its patterns compiled.
struct CompiledRule {
    name: String,
    keywords: Vec<String>,
    patterns: RegexSet,
}

impl CompiledRule {
    fn compile(rule: &CategoryRule) -> Result<Self, ClassifyError> {
        let patterns =
            RegexSet::new(&rule.patterns).map_err(|source| ClassifyError::InvalidPattern {
                category: rule.name.clone(),
                source,
            })?;
        Ok(Self {
            name: rule.name.clone(),
            keywords: rule.keywords.clone(),
            patterns,
        })
    }

    /// Score a lowercased title, returning the score and matched keywords.
    fn score(&self, title: &str) -> (u32, Vec<String>) {
        let mut score = 0;
        let mut matched = Vec::new();

        for keyword in &self.keywords {
            if title.contains(keyword.as_str()) {
                score += 2;
                if title.starts_with(keyword.as_str()) {
                    score += 1;
                }
                matched.push(keyword.clone());
            }
        }

        score += self.patterns.matches(title).iter().count() as u32;

        (score, matched)
    }
}

/// Broad-category classifier over conversation titles.
pub struct CategoryClassifier {
    rules: Vec<CompiledRule>,
    fallback_category: String,
}

impl CategoryClassifier {
    /// Build a classifier, compiling every rule's patterns once.
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifyError> {
        let rules = config
            .rules
            .iter()
            .map(CompiledRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules,
            fallback_category: config.fallback_category,
        })
    }

    /// Build a classifier from the default rule tables.
    pub fn with_defaults() -> Self {
        // The default tables are static data; compilation cannot fail.
        Self::new(ClassifierConfig::default())
            .unwrap_or_else(|e| panic!("default classifier rules failed to compile: {e}"))
    }

    /// Classify a conversation title into a broad category.
    ///
    /// Deterministic: ties resolve to the rule declared first.
    pub fn classify(&self, title: &str) -> Classification {
        let title_lower = title.to_lowercase();

        let mut best: Option<(usize, u32)> = None;
        let mut total: u32 = 0;
        let mut matched_by_rule: Vec<Vec<String>> = Vec::with_capacity(self.rules.len());

        for (idx, rule) in self.rules.iter().enumerate() {
            let (score, matched) = rule.score(&title_lower);
            matched_by_rule.push(matched);
            total += score;
            if score > 0 && best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        let classification = match best {
            Some((idx, score)) => Classification {
                category: self.rules[idx].name.clone(),
                confidence: score as f32 / (total + 1) as f32,
                matched_keywords: std::mem::take(&mut matched_by_rule[idx]),
            },
            None => Classification {
                category: self.fallback_category.clone(),
                confidence: 0.0,
                matched_keywords: Vec::new(),
            },
        };

        debug!(
            title,
            category = %classification.category,
            confidence = classification.confidence,
            "Classified conversation"
        );

        classification
    }
}
