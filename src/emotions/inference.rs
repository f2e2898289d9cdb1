//! Deep contextual inference — the fallback when no direct emotional
//! evidence was found — and the final depth re-prioritization pass.
//!
//! The depth score is a black-box contract: label-substring bonuses plus a
//! trigger-count bonus plus an intensity-proportional bonus. It is heuristic
//! but preserved exactly for output compatibility.

use crate::emotions::EmotionalState;
use crate::patterns::emotions::EMOTION_CATALOG;
use crate::utilities::text::{clamp_unit, truncate_with_ellipsis};

/// Labels whose presence in an emotion name marks it as "deep".
const DEPTH_MARKERS: &[&str] = &[
    "existential",
    "philosophical",
    "transcendent",
    "paradox",
    "suppressed",
    "deep",
];

/// Infer emotional states from structure alone: question types, exclamation
/// polarity, sentence rhythm, and emotionally-weighted word density.
pub fn contextual_inference(text: &str) -> Vec<EmotionalState> {
    let mut states = Vec::new();
    if text.trim().is_empty() {
        return states;
    }

    infer_from_questions(text, &mut states);
    infer_from_exclamations(text, &mut states);
    infer_from_rhythm(text, &mut states);
    infer_from_density(text, &mut states);

    // A non-empty text always yields at least a reflective baseline.
    if states.is_empty() {
        states.push(EmotionalState {
            emotion: "quiet_reflection".to_string(),
            intensity: 0.3,
            context: truncate_with_ellipsis(text.trim(), 150),
            text_position: 0,
            triggers: vec!["narrative tone".to_string()],
        });
    }
    states
}

fn infer_from_questions(text: &str, states: &mut Vec<EmotionalState>) {
    let mut search_from = 0usize;
    for part in text.split_inclusive('?') {
        let position = search_from;
        search_from += part.len();
        if !part.ends_with('?') {
            continue;
        }
        let question = part
            .rsplit(['.', '!'])
            .next()
            .unwrap_or(part)
            .trim();
        let lower = question.to_lowercase();

        let (emotion, intensity) = if ["meaning", "existence", "purpose", "why are we", "why do we"]
            .iter()
            .any(|m| lower.contains(m))
        {
            ("existential_questioning", 0.55)
        } else if ["am i", "who am", "myself", "my own"]
            .iter()
            .any(|m| lower.contains(m))
        {
            ("self_doubt", 0.5)
        } else if ["how can", "what can", "help", "save", "anyone"]
            .iter()
            .any(|m| lower.contains(m))
        {
            ("desperate_seeking", 0.5)
        } else {
            ("searching_curiosity", 0.4)
        };

        states.push(EmotionalState {
            emotion: emotion.to_string(),
            intensity,
            context: truncate_with_ellipsis(question, 150),
            text_position: position,
            triggers: vec!["question".to_string()],
        });
        if states.len() >= 3 {
            break;
        }
    }
}

fn infer_from_exclamations(text: &str, states: &mut Vec<EmotionalState>) {
    let mut search_from = 0usize;
    let mut added = 0;
    for part in text.split_inclusive('!') {
        let position = search_from;
        search_from += part.len();
        if !part.ends_with('!') || added >= 2 {
            continue;
        }
        let exclamation = part
            .rsplit(['.', '?'])
            .next()
            .unwrap_or(part)
            .trim();
        let lower = exclamation.to_lowercase();

        let (emotion, intensity) = if ["wonderful", "beautiful", "yes", "finally", "at last"]
            .iter()
            .any(|m| lower.contains(m))
        {
            ("emphatic_joy", 0.5)
        } else if ["no", "never", "stop", "enough", "can't"]
            .iter()
            .any(|m| lower.contains(m))
        {
            ("emphatic_distress", 0.55)
        } else {
            ("heightened_intensity", 0.45)
        };

        states.push(EmotionalState {
            emotion: emotion.to_string(),
            intensity,
            context: truncate_with_ellipsis(exclamation, 150),
            text_position: position,
            triggers: vec!["exclamation".to_string()],
        });
        added += 1;
    }
}

fn infer_from_rhythm(text: &str, states: &mut Vec<EmotionalState>) {
    let sentence_lengths: Vec<usize> = crate::utilities::text::sentences(text)
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect();
    if sentence_lengths.len() < 3 {
        return;
    }

    let n = sentence_lengths.len() as f64;
    let mean = sentence_lengths.iter().sum::<usize>() as f64 / n;
    let variance = sentence_lengths
        .iter()
        .map(|&l| (l as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let short_ratio =
        sentence_lengths.iter().filter(|&&l| l <= 5).count() as f64 / n;
    let long_ratio =
        sentence_lengths.iter().filter(|&&l| l >= 20).count() as f64 / n;

    if variance.sqrt() > 8.0 {
        states.push(rhythm_state("turbulent_rhythm", 0.4, "high sentence-length variance"));
    }
    if short_ratio > 0.5 {
        states.push(rhythm_state("staccato_tension", 0.45, "clipped short sentences"));
    }
    if long_ratio > 0.5 {
        states.push(rhythm_state("contemplative_flow", 0.4, "long unbroken sentences"));
    }
}

fn rhythm_state(emotion: &str, intensity: f64, trigger: &str) -> EmotionalState {
    EmotionalState {
        emotion: emotion.to_string(),
        intensity,
        context: "inferred from prose rhythm".to_string(),
        text_position: 0,
        triggers: vec![trigger.to_string()],
    }
}

fn infer_from_density(text: &str, states: &mut Vec<EmotionalState>) {
    let words = crate::utilities::text::clean_words(text);
    if words.is_empty() {
        return;
    }
    let weighted = words
        .iter()
        .filter(|w| {
            EMOTION_CATALOG
                .iter()
                .any(|def| def.keywords.contains(&w.as_str()))
        })
        .count();
    let density = weighted as f64 / words.len() as f64;
    if density > 0.05 {
        states.push(EmotionalState {
            emotion: "semantic_intensity".to_string(),
            intensity: clamp_unit(0.3 + density * 5.0),
            context: "dense emotional vocabulary".to_string(),
            text_position: 0,
            triggers: vec![format!("{} weighted words", weighted)],
        });
    }
}

// ============================================================================
// Depth re-prioritization
// ============================================================================

/// Depth score for the final ordering: marker-substring bonus, trigger-count
/// bonus, and an intensity-proportional component.
pub fn depth_score(state: &EmotionalState) -> f64 {
    let mut score = 0.0;
    if DEPTH_MARKERS.iter().any(|m| state.emotion.contains(m)) {
        score += 0.3;
    }
    if state.triggers.len() > 2 {
        score += 0.15;
    }
    score + state.intensity * 0.5
}

/// Reorder by descending depth score and truncate to `max_states`.
pub fn reprioritize(mut states: Vec<EmotionalState>, max_states: usize) -> Vec<EmotionalState> {
    states.sort_by(|a, b| {
        depth_score(b)
            .partial_cmp(&depth_score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.text_position.cmp(&b.text_position))
            .then_with(|| a.emotion.cmp(&b.emotion))
    });
    states.truncate(max_states);
    states
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(emotion: &str, intensity: f64, triggers: usize) -> EmotionalState {
        EmotionalState {
            emotion: emotion.to_string(),
            intensity,
            context: String::new(),
            text_position: 0,
            triggers: (0..triggers).map(|i| format!("t{}", i)).collect(),
        }
    }

    #[test]
    fn test_existential_question_classified() {
        let states = contextual_inference("What is the meaning of all this?");
        assert!(states.iter().any(|s| s.emotion == "existential_questioning"));
    }

    #[test]
    fn test_negative_exclamation_classified() {
        let states = contextual_inference("No! Never again!");
        assert!(states.iter().any(|s| s.emotion == "emphatic_distress"));
    }

    #[test]
    fn test_plain_text_gets_reflective_baseline() {
        let states = contextual_inference("The cart rolled along the road.");
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].emotion, "quiet_reflection");
    }

    #[test]
    fn test_empty_text_infers_nothing() {
        assert!(contextual_inference("").is_empty());
    }

    #[test]
    fn test_staccato_rhythm_detected() {
        let states = contextual_inference("He ran. She hid. They waited. Dawn came. It was over.");
        assert!(states.iter().any(|s| s.emotion == "staccato_tension"));
    }

    #[test]
    fn test_depth_markers_outrank_plain_intensity() {
        let deep = state("existential_anxiety", 0.5, 1);
        let plain = state("joy", 0.6, 1);
        assert!(depth_score(&deep) > depth_score(&plain));
    }

    #[test]
    fn test_reprioritize_truncates() {
        let states: Vec<_> = (0..20).map(|i| state("joy", 0.5, i)).collect();
        assert_eq!(reprioritize(states, 12).len(), 12);
    }

    #[test]
    fn test_reprioritize_puts_deep_states_first() {
        let states = vec![
            state("joy", 0.9, 1),
            state("suppressed_anger", 0.5, 4),
            state("sadness", 0.6, 1),
        ];
        let ordered = reprioritize(states, 12);
        assert_eq!(ordered[0].emotion, "suppressed_anger");
    }
}
