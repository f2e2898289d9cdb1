//! Shared string helpers for the analysis passes.
//!
//! Everything here is pure and UTF-8 safe; offsets returned are byte offsets
//! into the original text (only ever used as ratios, never re-sliced on
//! non-boundary positions).

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());

/// Split text into trimmed, non-empty sentences on `.`, `!`, `?`.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split_terminator(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split text into trimmed, non-empty paragraphs on blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// Lowercased words with surrounding punctuation stripped.
pub fn clean_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Average word length in characters (0.0 for empty text).
pub fn avg_word_length(text: &str) -> f64 {
    let words = clean_words(text);
    if words.is_empty() {
        return 0.0;
    }
    let total: usize = words.iter().map(|w| w.chars().count()).sum();
    total as f64 / words.len() as f64
}

/// Order-preserving de-duplication, capped at `cap` entries.
pub fn dedup_capped(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for item in items {
        let key = item.to_lowercase();
        if seen.insert(key) {
            out.push(item);
            if out.len() == cap {
                break;
            }
        }
    }
    out
}

/// Non-overlapping, case-insensitive occurrence count of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let haystack = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    haystack.matches(&needle).count()
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
pub fn first_occurrence(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack.to_lowercase().find(&needle.to_lowercase())
}

/// Distinct capitalized words (`Word` shape) in the text, sorted.
pub fn capitalized_words(text: &str) -> BTreeSet<String> {
    CAPITALIZED_WORD
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Clamp a score into `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_and_trim() {
        let text = "First one. Second one!  Third one? ";
        assert_eq!(sentences(text), vec!["First one", "Second one", "Third one"]);
    }

    #[test]
    fn test_paragraphs_skip_blank() {
        let text = "one\n\n\n\ntwo\n\nthree";
        assert_eq!(paragraphs(text), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_truncate_adds_ellipsis_only_when_cut() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_dedup_capped_is_case_insensitive() {
        let items = vec![
            "Loyal".to_string(),
            "loyal".to_string(),
            "brave".to_string(),
            "calm".to_string(),
        ];
        assert_eq!(dedup_capped(items, 2), vec!["Loyal", "brave"]);
    }

    #[test]
    fn test_count_and_first_occurrence() {
        let text = "Elena saw elena. ELENA smiled.";
        assert_eq!(count_occurrences(text, "Elena"), 3);
        assert_eq!(first_occurrence(text, "elena"), Some(0));
        assert_eq!(first_occurrence(text, "Marcus"), None);
    }

    #[test]
    fn test_avg_word_length_ignores_punctuation() {
        // "to" + "be" -> 2.0
        assert!((avg_word_length("to be!") - 2.0).abs() < f64::EPSILON);
        assert_eq!(avg_word_length(""), 0.0);
    }

    #[test]
    fn test_capitalized_words_distinct() {
        let words = capitalized_words("Elena met Marcus. Elena smiled.");
        assert_eq!(words.len(), 2);
        assert!(words.contains("Elena") && words.contains("Marcus"));
    }
}
