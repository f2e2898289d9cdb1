//! Whole-text philosophical-emotion mapping and cross-segment pattern
//! detection (progression, contradiction, cyclicality, suppression).

use std::collections::BTreeMap;

use crate::emotions::EmotionalState;
use crate::patterns::emotions::{
    base_emotion, OPPOSITE_PAIRS, PHILOSOPHICAL_CONCEPTS, SUPPRESSION_CUES, TRANSITION_LEXICON,
};
use crate::utilities::text::{clamp_unit, sentences, truncate_with_ellipsis};

/// Instantiate named emotional states for each philosophical concept whose
/// trigger vocabulary appears in the text.
pub fn philosophical_states(text: &str) -> Vec<EmotionalState> {
    let lower = text.to_lowercase();
    let text_sentences = sentences(text);
    let mut states = Vec::new();

    for def in PHILOSOPHICAL_CONCEPTS {
        let present: Vec<&str> = def
            .triggers
            .iter()
            .filter(|t| lower.contains(*t))
            .copied()
            .collect();
        if present.is_empty() {
            continue;
        }

        let evidence = present.len() as f64;
        let position = present
            .iter()
            .filter_map(|t| lower.find(*t))
            .min()
            .unwrap_or(0);
        let context = text_sentences
            .iter()
            .find(|s| {
                let s_lower = s.to_lowercase();
                present.iter().any(|t| s_lower.contains(t))
            })
            .map(|s| truncate_with_ellipsis(s, 150))
            .unwrap_or_default();

        for (emotion, base) in def.emotions {
            states.push(EmotionalState {
                emotion: emotion.to_string(),
                intensity: clamp_unit(base + evidence * 0.3),
                context: context.clone(),
                text_position: position,
                triggers: present.iter().map(|s| s.to_string()).collect(),
            });
        }
    }

    states
}

/// Detect cross-segment patterns from the states gathered so far. The input
/// is scanned in text order; each pattern family contributes a bounded number
/// of derived states.
pub fn detect_cross_segment_patterns(
    states: &[EmotionalState],
    text: &str,
) -> Vec<EmotionalState> {
    let mut derived = Vec::new();

    let mut ordered: Vec<&EmotionalState> = states.iter().collect();
    ordered.sort_by(|a, b| {
        a.text_position
            .cmp(&b.text_position)
            .then_with(|| a.emotion.cmp(&b.emotion))
    });

    // Progression: consecutive transitions matched against the lexicon.
    let mut progressions = 0;
    for pair in ordered.windows(2) {
        if progressions == 3 {
            break;
        }
        let from = base_emotion(&pair[0].emotion);
        let to = base_emotion(&pair[1].emotion);
        if let Some((_, _, label)) = TRANSITION_LEXICON
            .iter()
            .find(|(f, t, _)| *f == from && *t == to)
        {
            derived.push(EmotionalState {
                emotion: label.to_string(),
                intensity: clamp_unit((pair[0].intensity + pair[1].intensity) / 2.0),
                context: format!("shift from {} to {}", pair[0].emotion, pair[1].emotion),
                text_position: pair[1].text_position,
                triggers: vec![pair[0].emotion.clone(), pair[1].emotion.clone()],
            });
            progressions += 1;
        }
    }

    // Contradiction: co-presence of opposite base emotions.
    let mut by_base: BTreeMap<&str, &EmotionalState> = BTreeMap::new();
    for state in ordered.iter().copied() {
        by_base.entry(base_emotion(&state.emotion)).or_insert(state);
    }
    let mut contradictions = 0;
    for (a, b, label) in OPPOSITE_PAIRS {
        if contradictions == 2 {
            break;
        }
        if let (Some(first), Some(second)) = (by_base.get(a), by_base.get(b)) {
            derived.push(EmotionalState {
                emotion: label.to_string(),
                intensity: clamp_unit((first.intensity + second.intensity) / 2.0),
                context: format!("co-present {} and {}", a, b),
                text_position: first.text_position.min(second.text_position),
                triggers: vec![first.emotion.clone(), second.emotion.clone()],
            });
            contradictions += 1;
        }
    }

    // Cyclicality: the same base emotion surfacing in two or more states.
    let mut base_counts: BTreeMap<&str, Vec<&EmotionalState>> = BTreeMap::new();
    for state in ordered.iter().copied() {
        base_counts
            .entry(base_emotion(&state.emotion))
            .or_default()
            .push(state);
    }
    let mut cycles = 0;
    for (base, group) in &base_counts {
        if cycles == 2 {
            break;
        }
        if group.len() >= 2 {
            let avg =
                group.iter().map(|s| s.intensity).sum::<f64>() / group.len() as f64;
            derived.push(EmotionalState {
                emotion: format!("cyclical_{}", base),
                intensity: clamp_unit(avg),
                context: format!("{} recurs across {} passages", base, group.len()),
                text_position: group[0].text_position,
                triggers: group.iter().map(|s| s.emotion.clone()).collect(),
            });
            cycles += 1;
        }
    }

    // Suppression: subtext phrases in the raw text.
    let lower = text.to_lowercase();
    let mut suppressions = 0;
    for (phrase, emotion) in SUPPRESSION_CUES {
        if suppressions == 3 {
            break;
        }
        if let Some(position) = lower.find(phrase) {
            derived.push(EmotionalState {
                emotion: emotion.to_string(),
                intensity: 0.55,
                context: truncate_with_ellipsis(
                    sentences(text)
                        .into_iter()
                        .find(|s| s.to_lowercase().contains(phrase))
                        .unwrap_or(*phrase),
                    150,
                ),
                text_position: position,
                triggers: vec![phrase.to_string()],
            });
            suppressions += 1;
        }
    }

    derived
}
