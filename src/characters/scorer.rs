//! Candidate scoring — raw tallies plus textual context into bounded
//! confidence values.
//!
//! Each confidence term is bounded independently before the sum is clamped,
//! so no single evidence source can dominate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::patterns::names::character_context_patterns;
use crate::utilities::text::{clamp_unit, count_occurrences, first_occurrence};

/// A candidate that passed the shape check, with its bounded confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,
    pub raw_score: f64,
    pub confidence: f64,
    pub occurrences: usize,
}

/// Whether a candidate name has a plausible shape: 2-25 characters, letters
/// plus space/apostrophe/hyphen only.
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    if !(2..=25).contains(&len) {
        return false;
    }
    name.chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '\'' || c == '-')
}

/// Score and filter raw candidates. Survivors are sorted by descending
/// confidence (name as tiebreaker for determinism).
pub fn score_candidates(
    text: &str,
    tally: &BTreeMap<String, f64>,
    confidence_floor: f64,
) -> Vec<ScoredCandidate> {
    let text_len = text.len().max(1);
    let mut scored: Vec<ScoredCandidate> = Vec::new();

    for (name, raw_score) in tally {
        if !is_valid_name(name) {
            continue;
        }

        let base = (raw_score / 5.0).min(0.7);

        let context: f64 = character_context_patterns(name)
            .iter()
            .map(|p| p.find_iter(text).count() as f64 * 0.1)
            .sum::<f64>()
            .min(0.4);

        let position = match first_occurrence(text, name) {
            Some(offset) => 0.15 * (1.0 - offset as f64 / text_len as f64),
            None => 0.0,
        };

        let occurrences = count_occurrences(text, name);
        let frequency = (occurrences as f64 * 0.1).min(0.2);

        let confidence = clamp_unit(base + context + position + frequency);
        if confidence >= confidence_floor {
            scored.push(ScoredCandidate {
                name: name.clone(),
                raw_score: *raw_score,
                confidence,
                occurrences,
            });
        }
    }

    scored.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally_of(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(n, s)| (n.to_string(), *s))
            .collect()
    }

    #[test]
    fn test_name_shape_check() {
        assert!(is_valid_name("Elena"));
        assert!(is_valid_name("Elena Vasquez"));
        assert!(is_valid_name("O'Brien"));
        assert!(is_valid_name("Jean-Luc"));
        assert!(!is_valid_name("X"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name("a name that runs far past the cap"));
    }

    #[test]
    fn test_early_mention_scores_position_bonus() {
        let text = "John walked into the room. He was nervous about the meeting. \
                    Sarah greeted him with a smile.";
        let tally = tally_of(&[("John", 2.0), ("Sarah", 2.0)]);
        let scored = score_candidates(text, &tally, 0.3);
        let john = scored.iter().find(|c| c.name == "John").unwrap();
        let sarah = scored.iter().find(|c| c.name == "Sarah").unwrap();
        assert!(john.confidence > 0.3);
        assert!(john.confidence > sarah.confidence);
    }

    #[test]
    fn test_low_evidence_candidates_filtered() {
        let text = "Something happened near Dover once.";
        let tally = tally_of(&[("Dover", 1.0), ("D4ver", 9.0)]);
        // Dover: base 0.2 + frequency 0.1 + small position bonus < 0.4.
        let scored = score_candidates(text, &tally, 0.4);
        assert!(scored.is_empty());
    }

    #[test]
    fn test_context_term_is_capped() {
        // Ten context hits would be 1.0 uncapped; the term must stay at 0.4.
        let text = "Rhea was tired. Rhea was calm. Rhea was early. Rhea was late. \
                    Rhea was here. Rhea was there. Rhea was sure. Rhea was kind. \
                    Rhea was quick. Rhea was slow.";
        let tally = tally_of(&[("Rhea", 1.0)]);
        let scored = score_candidates(text, &tally, 0.0);
        let rhea = &scored[0];
        // base 0.2 + context 0.4 + position 0.15 + frequency 0.2 = 0.95 max
        assert!(rhea.confidence <= 0.95 + f64::EPSILON);
        assert!(rhea.confidence > 0.7);
    }

    #[test]
    fn test_confidence_always_in_unit_range() {
        let text = "Elena said hello. Elena's voice was calm. Elena smiled.";
        let tally = tally_of(&[("Elena", 50.0)]);
        let scored = score_candidates(text, &tally, 0.0);
        assert!(scored[0].confidence <= 1.0);
    }
}
