//! Lexical similarity between keyword sets.

use crate::keywords::KeywordSet;

/// Jaccard similarity: |A ∩ B| / |A ∪ B|, in [0.0, 1.0].
///
/// Two empty sets score 0.0; the absence of keywords is not treated as
/// evidence of relatedness.
pub fn jaccard(a: &KeywordSet, b: &KeywordSet) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();

    if union == 0 {
        return 0.0;
    }

    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_jaccard_identical() {
        let a = set(&["rust", "cargo", "crate"]);
        assert!((jaccard(&a, &a) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_jaccard_disjoint() {
        let a = set(&["rust", "cargo"]);
        let b = set(&["python", "flask"]);
        assert!(jaccard(&a, &b).abs() < f32::EPSILON);
    }

    #[test]
    fn test_jaccard_partial_overlap() {
        let a = set(&["rust", "cargo"]);
        let b = set(&["rust", "python"]);
        // 1 shared of 3 total
        assert!((jaccard(&a, &b) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_jaccard_both_empty_is_zero() {
        assert!(jaccard(&KeywordSet::new(), &KeywordSet::new()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_jaccard_one_empty_is_zero() {
        let a = set(&["rust"]);
        assert!(jaccard(&a, &KeywordSet::new()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_jaccard_symmetric() {
        let a = set(&["rust", "cargo", "crate"]);
        let b = set(&["rust", "python"]);
        assert!((jaccard(&a, &b) - jaccard(&b, &a)).abs() < f32::EPSILON);
    }
}
