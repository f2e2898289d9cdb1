//! Theme analysis — scores the whole text against the 14-theme catalog.

use serde::{Deserialize, Serialize};

use crate::patterns::themes::THEME_CATALOG;
use crate::utilities::text::{count_occurrences, sentences, truncate_with_ellipsis};

/// A ranked narrative theme with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeTheme {
    /// Human-readable theme label.
    pub theme: String,
    /// Evidence-weighted salience in [0, 1].
    pub strength: f64,
    /// Supporting fragments (pattern matches and context sentences, at most 5).
    pub evidence: Vec<String>,
    /// The keywords that actually hit (at most 5).
    pub keywords: Vec<String>,
}

/// Score every theme and keep those with strength above 0.1, sorted
/// descending (label as tiebreaker), capped at `max_themes`.
pub fn analyze_themes(text: &str, max_themes: usize) -> Vec<NarrativeTheme> {
    let lower = text.to_lowercase();
    let text_sentences = sentences(text);
    let mut themes = Vec::new();

    for def in THEME_CATALOG.iter() {
        let mut keyword_hits = 0usize;
        let mut hit_keywords = Vec::new();
        for keyword in def.keywords {
            let count = count_occurrences(&lower, keyword);
            if count > 0 {
                keyword_hits += count;
                if hit_keywords.len() < 5 {
                    hit_keywords.push(keyword.to_string());
                }
            }
        }

        let mut evidence = Vec::new();
        let mut pattern_hits = 0usize;
        for pattern in &def.patterns {
            for m in pattern.find_iter(text) {
                pattern_hits += 1;
                if evidence.len() < 3 {
                    evidence.push(m.as_str().to_string());
                }
            }
        }

        // Sentences where at least two distinct theme keywords co-occur.
        // At most 2 of them enter the evidence list, alongside up to 3
        // pattern matches.
        let mut context_sentences = 0usize;
        let mut context_evidence = 0usize;
        for sentence in &text_sentences {
            let sentence_lower = sentence.to_lowercase();
            let distinct = def
                .keywords
                .iter()
                .filter(|k| sentence_lower.contains(*k))
                .count();
            if distinct >= 2 {
                context_sentences += 1;
                if context_evidence < 2 && evidence.len() < 5 {
                    context_evidence += 1;
                    evidence.push(truncate_with_ellipsis(sentence, 100));
                }
            }
        }

        let strength = (keyword_hits as f64 * 0.1
            + pattern_hits as f64 * 0.15
            + context_sentences as f64 * 0.2)
            .min(1.0);
        if strength > 0.1 {
            themes.push(NarrativeTheme {
                theme: def.label.to_string(),
                strength,
                evidence,
                keywords: hit_keywords,
            });
        }
    }

    themes.sort_by(|a, b| {
        b.strength
            .partial_cmp(&a.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.theme.cmp(&b.theme))
    });
    themes.truncate(max_themes);
    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_betrayal_theme_detected() {
        let text = "Marcus had been her friend, but his deception changed everything. \
                    She felt betrayed by the lies.";
        let themes = analyze_themes(text, 8);
        assert!(themes
            .iter()
            .any(|t| t.theme == "Betrayal & Deception" && t.strength > 0.1));
    }

    #[test]
    fn test_single_weak_keyword_is_dropped() {
        // One keyword hit is strength 0.1, which is not above the floor.
        let themes = analyze_themes("They shared a quiet home.", 8);
        assert!(themes.iter().all(|t| t.theme != "Family"));
    }

    #[test]
    fn test_sorted_descending_and_capped() {
        let text = "Love and betrayal. Love and power. Love and justice. War and conflict. \
                    The journey was an adventure. A mystery hid in the family home. \
                    Friends stayed loyal. They fought to survive the danger. Hearts changed.";
        let themes = analyze_themes(text, 8);
        assert!(themes.len() <= 8);
        for pair in themes.windows(2) {
            assert!(pair[0].strength >= pair[1].strength);
        }
    }

    #[test]
    fn test_strength_clamped_to_one() {
        let text = "betrayal ".repeat(40);
        let themes = analyze_themes(&text, 8);
        let betrayal = themes
            .iter()
            .find(|t| t.theme == "Betrayal & Deception")
            .unwrap();
        assert!((betrayal.strength - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_evidence_and_keywords_capped() {
        let text = "He betrayed her. She betrayed him. They lied and deceived. \
                    Secrets and lies and betrayal and deception everywhere.";
        let themes = analyze_themes(text, 8);
        let betrayal = themes
            .iter()
            .find(|t| t.theme == "Betrayal & Deception")
            .unwrap();
        assert!(betrayal.evidence.len() <= 5);
        assert!(betrayal.keywords.len() <= 5);
    }

    #[test]
    fn test_context_sentence_evidence_capped_at_two() {
        // Four keyword-pair sentences, each phrased so no Family pattern
        // fires: evidence must hold the first two context sentences only.
        let text = "A mother and a father waited. The sister and brother slept. \
                    A daughter and a son played. Mother and sister sang.";
        let themes = analyze_themes(text, 8);
        let family = themes.iter().find(|t| t.theme == "Family").unwrap();
        assert_eq!(
            family.evidence.len(),
            2,
            "unexpected evidence: {:?}",
            family.evidence
        );
        // All four sentences still count toward strength.
        assert!((family.strength - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_text_has_no_themes() {
        assert!(analyze_themes("", 8).is_empty());
    }
}
