//! Text segmentation and per-segment emotion scoring (traditional + deep).

use crate::emotions::EmotionalState;
use crate::patterns::emotions::{
    CONNECTIVES, DEEP_EMOTION_CATALOG, EMOTION_CATALOG, INTENSITY_MODIFIERS,
};
use crate::utilities::text::{clamp_unit, sentences, truncate_with_ellipsis};

/// A contiguous slice of the input with its byte offset.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub start: usize,
}

/// Split text into roughly `target_count` contiguous segments of at least
/// `min_chars` bytes, cutting only at sentence boundaries. Short texts come
/// back as a single segment.
pub fn segment_text(text: &str, target_count: usize, min_chars: usize) -> Vec<Segment<'_>> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let len = text.len();
    if len < min_chars * 2 {
        return vec![Segment { text, start: 0 }];
    }

    let target = (len / target_count.max(1)).max(min_chars);
    let mut segments = Vec::new();
    let mut seg_start = 0usize;

    for (i, c) in text.char_indices() {
        if matches!(c, '.' | '!' | '?') {
            let end = i + c.len_utf8();
            if end - seg_start >= target {
                segments.push(Segment {
                    text: &text[seg_start..end],
                    start: seg_start,
                });
                seg_start = end;
            }
        }
    }

    if seg_start < len && !text[seg_start..].trim().is_empty() {
        let remainder_len = len - seg_start;
        if remainder_len < min_chars {
            if let Some(last) = segments.pop() {
                segments.push(Segment {
                    text: &text[last.start..],
                    start: last.start,
                });
            } else {
                segments.push(Segment { text, start: 0 });
            }
        } else {
            segments.push(Segment {
                text: &text[seg_start..],
                start: seg_start,
            });
        }
    } else if segments.is_empty() {
        segments.push(Segment { text, start: 0 });
    }

    segments
}

/// Score one segment: traditional emotions gated on intensity and context
/// depth, deep categories gated on combined score. The top 3 states by
/// intensity survive.
pub fn analyze_segment(segment: &Segment<'_>) -> Vec<EmotionalState> {
    let mut states = traditional_states(segment);
    states.extend(deep_states(segment));

    states.sort_by(|a, b| {
        b.intensity
            .partial_cmp(&a.intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.emotion.cmp(&b.emotion))
    });
    states.truncate(3);
    states
}

fn traditional_states(segment: &Segment<'_>) -> Vec<EmotionalState> {
    let lower = segment.text.to_lowercase();
    let segment_sentences = sentences(segment.text);
    let segment_words = crate::utilities::text::clean_words(segment.text);
    let mut states = Vec::new();

    for def in EMOTION_CATALOG {
        let mut triggers = Vec::new();
        let mut hits = 0usize;
        let mut first_hit = None;
        for keyword in def.keywords {
            let mut search = 0usize;
            while let Some(found) = lower[search..].find(keyword) {
                let at = search + found;
                hits += 1;
                if first_hit.is_none() {
                    first_hit = Some(at);
                }
                search = at + keyword.len();
            }
            if lower.contains(keyword) {
                triggers.push(keyword.to_string());
            }
        }
        if hits == 0 {
            continue;
        }

        // Base intensity grows with extra hits, multiplied by the strongest
        // adverbial modifier present in the segment.
        let base = 0.4 + 0.15 * (hits.saturating_sub(1) as f64).min(3.0);
        // Whole-word matching for single-word modifiers ("so" must not hit
        // "sorrow"); phrase modifiers use substring search.
        let modifier = INTENSITY_MODIFIERS
            .iter()
            .filter(|(word, _)| {
                if word.contains(' ') {
                    lower.contains(word)
                } else {
                    segment_words.iter().any(|w| w == word)
                }
            })
            .map(|(_, factor)| *factor)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or(1.0);
        let intensity = clamp_unit(base * modifier);

        // Context depth: sentence length plus causal/temporal connectives in
        // the sentences that actually carry the keyword.
        let keyword_sentences: Vec<&&str> = segment_sentences
            .iter()
            .filter(|s| {
                let s_lower = s.to_lowercase();
                def.keywords.iter().any(|k| s_lower.contains(k))
            })
            .collect();
        let mut depth: f64 = 0.0;
        if keyword_sentences.iter().any(|s| s.len() > 80) {
            depth += 0.3;
        } else if !keyword_sentences.is_empty() {
            depth += 0.15;
        }
        let connective_hits = CONNECTIVES
            .iter()
            .filter(|c| {
                keyword_sentences
                    .iter()
                    .any(|s| s.to_lowercase().contains(*c))
            })
            .count();
        depth += (connective_hits as f64 * 0.15).min(0.4);
        depth = clamp_unit(depth);

        if intensity <= 0.2 || depth <= 0.2 {
            continue;
        }

        let context = keyword_sentences
            .first()
            .map(|s| truncate_with_ellipsis(s, 150))
            .unwrap_or_default();
        states.push(EmotionalState {
            emotion: def.name.to_string(),
            intensity,
            context,
            text_position: segment.start + first_hit.unwrap_or(0),
            triggers,
        });
    }

    states
}

fn deep_states(segment: &Segment<'_>) -> Vec<EmotionalState> {
    let lower = segment.text.to_lowercase();
    let mut states = Vec::new();

    for def in DEEP_EMOTION_CATALOG {
        let keyword_hits: Vec<&str> = def
            .keywords
            .iter()
            .filter(|k| lower.contains(*k))
            .copied()
            .collect();
        let indicator_hits: Vec<&str> = def
            .indicators
            .iter()
            .filter(|i| lower.contains(*i))
            .copied()
            .collect();

        let score = keyword_hits.len() as f64 * 0.25 + indicator_hits.len() as f64 * 0.15;
        if score <= 0.4 {
            continue;
        }

        let first_hit = keyword_hits
            .iter()
            .chain(indicator_hits.iter())
            .filter_map(|k| lower.find(*k))
            .min()
            .unwrap_or(0);
        let context_sentence = sentences(segment.text)
            .into_iter()
            .find(|s| {
                let s_lower = s.to_lowercase();
                keyword_hits.iter().any(|k| s_lower.contains(k))
            })
            .unwrap_or(segment.text);

        states.push(EmotionalState {
            emotion: def.name.to_string(),
            intensity: clamp_unit(score),
            context: truncate_with_ellipsis(context_sentence, 150),
            text_position: segment.start + first_hit,
            triggers: keyword_hits
                .iter()
                .chain(indicator_hits.iter())
                .map(|s| s.to_string())
                .collect(),
        });
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_segment() {
        let segments = segment_text("A short line.", 5, 200);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, 0);
    }

    #[test]
    fn test_long_text_splits_at_sentence_boundaries() {
        let sentence = "The rain kept falling on the empty harbor road all through the night. ";
        let text = sentence.repeat(30);
        let segments = segment_text(&text, 5, 200);
        assert!(segments.len() >= 2);
        // Contiguity: each segment starts where the previous ended.
        for pair in segments.windows(2) {
            assert_eq!(pair[0].start + pair[0].text.len(), pair[1].start);
        }
        for segment in &segments {
            assert!(segment.text.ends_with('.') || segment.start + segment.text.len() == text.len());
        }
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(segment_text("", 5, 200).is_empty());
        assert!(segment_text("   \n  ", 5, 200).is_empty());
    }

    #[test]
    fn test_keyword_with_connective_yields_state() {
        let segment = Segment {
            text: "She was deeply afraid because the storm had trapped them on the ridge \
                   after the light failed.",
            start: 0,
        };
        let states = analyze_segment(&segment);
        let fear = states.iter().find(|s| s.emotion == "fear").unwrap();
        assert!(fear.intensity > 0.2);
        assert!(fear.triggers.contains(&"afraid".to_string()));
    }

    #[test]
    fn test_intensity_modifier_raises_score() {
        let plain = Segment {
            text: "He was afraid because the night was long and the road was empty and far.",
            start: 0,
        };
        let modified = Segment {
            text: "He was extremely afraid because the night was long and the road was empty.",
            start: 0,
        };
        let plain_fear = analyze_segment(&plain)
            .into_iter()
            .find(|s| s.emotion == "fear")
            .unwrap();
        let modified_fear = analyze_segment(&modified)
            .into_iter()
            .find(|s| s.emotion == "fear")
            .unwrap();
        assert!(modified_fear.intensity > plain_fear.intensity);
    }

    #[test]
    fn test_deep_category_needs_combined_score() {
        let segment = Segment {
            text: "Everything felt meaningless, a void without purpose, and he wondered why \
                   existence bothered to continue at all.",
            start: 0,
        };
        let states = analyze_segment(&segment);
        assert!(states.iter().any(|s| s.emotion == "existential_anxiety"));
    }

    #[test]
    fn test_top_three_per_segment() {
        let segment = Segment {
            text: "Joy and love and hope and trust and fear, because happiness and dread and \
                   sorrow all crowded into one long breathless moment together when the door opened.",
            start: 0,
        };
        assert!(analyze_segment(&segment).len() <= 3);
    }

    #[test]
    fn test_bare_keyword_without_depth_is_gated() {
        // Short sentence, no connectives: depth stays at 0.15.
        let segment = Segment {
            text: "Fear.",
            start: 0,
        };
        assert!(analyze_segment(&segment).is_empty());
    }
}
