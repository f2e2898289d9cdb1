//! Emotional-arc analysis.
//!
//! Runs as a staged pipeline over the text: segmentation and per-segment
//! scoring, whole-text philosophical mapping, cross-segment pattern
//! detection, a contextual-inference fallback when nothing was found, and a
//! final depth re-prioritization capped at the configured state count.

pub mod inference;
pub mod patterns;
pub mod segments;

use serde::{Deserialize, Serialize};

use crate::utilities::cancel::CancelToken;
use crate::utilities::config::AnalyzerConfig;
use crate::utilities::errors::AnalysisError;

/// One point on the emotional trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalState {
    pub emotion: String,
    /// Evidence-weighted magnitude in [0, 1].
    pub intensity: f64,
    /// Supporting fragment (at most 150 chars plus ellipsis).
    pub context: String,
    /// Character offset of the earliest supporting evidence.
    pub text_position: usize,
    /// Keywords/phrases that produced this state.
    pub triggers: Vec<String>,
}

/// Analyze the emotional arc of `text`. The cancellation token, when
/// provided, is checked once per segment.
pub fn analyze_emotional_arc(
    text: &str,
    config: &AnalyzerConfig,
    cancel: Option<&CancelToken>,
) -> Result<Vec<EmotionalState>, AnalysisError> {
    let mut states = Vec::new();

    for segment in segments::segment_text(text, config.segment_count, config.min_segment_chars) {
        if let Some(token) = cancel {
            token.check()?;
        }
        states.extend(segments::analyze_segment(&segment));
    }

    states.extend(patterns::philosophical_states(text));

    let derived = patterns::detect_cross_segment_patterns(&states, text);
    states.extend(derived);

    if states.is_empty() {
        states = inference::contextual_inference(text);
    }

    let mut states = inference::reprioritize(states, config.max_emotional_states);
    // The scoring passes work in byte offsets; the output contract is
    // character offsets.
    for state in &mut states {
        state.text_position = text
            .char_indices()
            .take_while(|(i, _)| *i < state.text_position)
            .count();
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(text: &str) -> Vec<EmotionalState> {
        analyze_emotional_arc(text, &AnalyzerConfig::default(), None).unwrap()
    }

    #[test]
    fn test_arc_capped_and_clamped() {
        let text = "She was extremely afraid because the storm surge kept rising. \
                    He felt deep joy when the rescue boats finally appeared at dawn. \
                    What is the meaning of survival? They held back tears together. \
                    Death and mortality hung over every choice they made that night.";
        let states = arc(text);
        assert!(states.len() <= 12);
        for state in &states {
            assert!((0.0..=1.0).contains(&state.intensity));
        }
    }

    #[test]
    fn test_empty_text_yields_empty_arc() {
        assert!(arc("").is_empty());
    }

    #[test]
    fn test_fallback_used_when_no_direct_evidence() {
        let states = arc("The cart rolled along the road toward town.");
        assert!(!states.is_empty());
        assert_eq!(states[0].emotion, "quiet_reflection");
    }

    #[test]
    fn test_cancel_token_aborts_segmented_analysis() {
        let token = CancelToken::new();
        token.cancel();
        let text = "A very long opening paragraph about the harbor and its keepers. ".repeat(20);
        let result = analyze_emotional_arc(&text, &AnalyzerConfig::default(), Some(&token));
        assert!(matches!(result, Err(AnalysisError::Cancelled)));
    }

    #[test]
    fn test_positions_are_character_offsets() {
        // The leading multi-byte character shifts byte and char offsets apart.
        let text = "Über the ridge they waited. She was afraid because the storm \
                    had trapped them on the cliff after the light failed.";
        let states = arc(text);
        let fear = states.iter().find(|s| s.emotion == "fear").unwrap();
        let byte_offset = text.find("afraid").unwrap();
        let char_offset = text[..byte_offset].chars().count();
        assert!(char_offset < byte_offset);
        assert_eq!(fear.text_position, char_offset);
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let text = "Fear gripped the town because the flood was rising. Hope returned at dawn.";
        assert_eq!(arc(text), arc(text));
    }
}
