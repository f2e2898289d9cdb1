//! Three-layer profile construction.
//!
//! For one scored candidate: collect every sentence and paragraph mentioning
//! the name, then derive the skin (observable), flesh (background/relational),
//! and core (psychological) layers independently from those segments. A
//! candidate that cannot support a profile comes back as a `ProfileRejection`
//! value, never a panic.

use std::collections::BTreeSet;

use crate::characters::profile::CharacterProfile;
use crate::characters::scorer::{is_valid_name, ScoredCandidate};
use crate::patterns::layers::{
    BACKSTORY_PATTERNS, BEHAVIORAL_BUCKETS, CONFLICT_PATTERNS, DESIRE_PATTERNS,
    DRIVER_BUCKET_PATTERNS, FEAR_PATTERNS, FORMATIVE_PATTERNS, MANNERISM_PATTERNS,
    MOTIVATION_PATTERNS, PHYSICAL_PATTERNS,
};
use crate::patterns::layers::RELATIONSHIP_NOUNS;
use crate::patterns::names::{alias_patterns, is_stop_name, quoted_speech_patterns, CAP_TOKEN};
use crate::utilities::errors::ProfileRejection;
use crate::utilities::text::{
    clamp_unit, dedup_capped, paragraphs, sentences, truncate_with_ellipsis,
};

/// Builds three-layer profiles from pre-split text.
pub struct ProfileBuilder<'a> {
    text: &'a str,
    sentences: Vec<&'a str>,
    paragraphs: Vec<&'a str>,
    total_words: usize,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            sentences: sentences(text),
            paragraphs: paragraphs(text),
            total_words: text.split_whitespace().count(),
        }
    }

    /// Build a profile for one candidate, or explain why it was rejected.
    pub fn build(
        &self,
        candidate: &ScoredCandidate,
        confidence_floor: f64,
    ) -> Result<CharacterProfile, ProfileRejection> {
        let name = candidate.name.trim();
        if name.is_empty() {
            return Err(ProfileRejection::EmptyName);
        }
        if !is_valid_name(name) {
            return Err(ProfileRejection::MalformedName {
                name: name.to_string(),
            });
        }

        let name_lower = name.to_lowercase();
        let segments: Vec<&str> = self
            .sentences
            .iter()
            .chain(self.paragraphs.iter())
            .copied()
            .filter(|s| s.to_lowercase().contains(&name_lower))
            .collect();
        if segments.is_empty() {
            return Err(ProfileRejection::NoMentions {
                name: name.to_string(),
            });
        }

        let mut profile = CharacterProfile::new(name);

        let dialogue_lines = self.attributed_dialogue(name);
        self.build_skin_layer(&mut profile, &segments, &dialogue_lines);
        self.build_flesh_layer(&mut profile, name, &segments);
        self.build_core_layer(&mut profile, &segments);
        profile.aliases = self.detect_aliases(name);

        profile.text_references = segments
            .iter()
            .take(5)
            .map(|s| truncate_with_ellipsis(s, 100))
            .collect();
        profile.first_appearance = self
            .sentences
            .iter()
            .find(|s| s.to_lowercase().contains(&name_lower))
            .map(|s| truncate_with_ellipsis(s, 100))
            .unwrap_or_default();

        let mention_count = segments.len();
        // Sparse texts yield few qualifying layer fields; the detection
        // confidence floors the profile so a strongly-attested name in a
        // short passage is not scored below its own detection.
        profile.confidence_score = self
            .profile_confidence(&profile, mention_count)
            .max(clamp_unit(candidate.confidence));
        profile.importance_score =
            self.importance(name, candidate.occurrences, dialogue_lines.len());

        if profile.confidence_score <= confidence_floor {
            return Err(ProfileRejection::InsufficientConfidence {
                name: name.to_string(),
                confidence: profile.confidence_score,
            });
        }
        Ok(profile)
    }

    // ------------------------------------------------------------------
    // Skin layer
    // ------------------------------------------------------------------

    fn build_skin_layer(
        &self,
        profile: &mut CharacterProfile,
        segments: &[&str],
        dialogue_lines: &[String],
    ) {
        let mut physical = Vec::new();
        let mut mannerisms = Vec::new();
        for segment in segments {
            for pattern in PHYSICAL_PATTERNS.iter() {
                for m in pattern.find_iter(segment) {
                    physical.push(m.as_str().trim().to_string());
                }
            }
            for pattern in MANNERISM_PATTERNS.iter() {
                for m in pattern.find_iter(segment) {
                    mannerisms.push(m.as_str().trim().to_string());
                }
            }
        }
        profile.physical_description = dedup_capped(physical, 3).join("; ");
        profile.mannerisms = dedup_capped(mannerisms, 4);

        let joined = segments.join(" ").to_lowercase();
        let mut traits = Vec::new();
        for (label, keywords) in BEHAVIORAL_BUCKETS {
            if keywords.iter().any(|k| joined.contains(k)) {
                traits.push(label.to_string());
            }
        }
        profile.behavioral_traits = dedup_capped(traits, 5);
        profile.speech_patterns = speech_patterns_from(dialogue_lines);
    }

    /// Quoted lines attributed to `name`, in both orders.
    fn attributed_dialogue(&self, name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for pattern in quoted_speech_patterns(name) {
            for caps in pattern.captures_iter(self.text) {
                if let Some(quote) = caps.get(1) {
                    lines.push(quote.as_str().to_string());
                }
            }
        }
        lines
    }

    // ------------------------------------------------------------------
    // Flesh layer
    // ------------------------------------------------------------------

    fn build_flesh_layer(&self, profile: &mut CharacterProfile, name: &str, segments: &[&str]) {
        let mut backstory = Vec::new();
        let mut formative = Vec::new();
        let mut relationships = Vec::new();
        let mut connections: BTreeSet<String> = BTreeSet::new();
        let name_tokens: Vec<String> = name
            .split_whitespace()
            .map(|t| t.to_string())
            .collect();

        for segment in segments {
            for pattern in BACKSTORY_PATTERNS.iter() {
                for m in pattern.find_iter(segment) {
                    backstory.push(m.as_str().trim().to_string());
                }
            }
            for pattern in FORMATIVE_PATTERNS.iter() {
                for m in pattern.find_iter(segment) {
                    formative.push(m.as_str().trim().to_string());
                }
            }

            let lower = segment.to_lowercase();
            for noun in RELATIONSHIP_NOUNS {
                if lower.contains(noun) {
                    relationships.push(format!(
                        "{}: {}",
                        noun,
                        truncate_with_ellipsis(segment, 80)
                    ));
                }
            }

            // Co-occurring proper nouns become social connections.
            for caps in CAP_TOKEN.captures_iter(segment) {
                let token = caps.get(1).unwrap().as_str();
                if !name_tokens.iter().any(|t| t == token) && !is_stop_name(token) {
                    connections.insert(token.to_string());
                }
            }
        }

        profile.backstory = dedup_capped(backstory, 2).join("; ");
        profile.formative_experiences = dedup_capped(formative, 4);
        profile.relationships = dedup_capped(relationships, 5);
        profile.social_connections = connections.into_iter().take(5).collect();
    }

    // ------------------------------------------------------------------
    // Core layer
    // ------------------------------------------------------------------

    fn build_core_layer(&self, profile: &mut CharacterProfile, segments: &[&str]) {
        let mut motivations = Vec::new();
        let mut fears = Vec::new();
        let mut desires = Vec::new();
        let mut conflicts = Vec::new();
        for segment in segments {
            for (patterns, sink) in [
                (&*MOTIVATION_PATTERNS, &mut motivations),
                (&*FEAR_PATTERNS, &mut fears),
                (&*DESIRE_PATTERNS, &mut desires),
                (&*CONFLICT_PATTERNS, &mut conflicts),
            ] {
                for pattern in patterns {
                    for m in pattern.find_iter(segment) {
                        sink.push(m.as_str().trim().to_string());
                    }
                }
            }
        }
        profile.motivations = dedup_capped(motivations, 4);
        profile.fears = dedup_capped(fears, 4);
        profile.desires = dedup_capped(desires, 4);
        profile.conflicts = dedup_capped(conflicts, 4);

        // Score the 8 driver buckets and keep the top 4 with hits.
        let mut scored: Vec<(usize, &str)> = DRIVER_BUCKET_PATTERNS
            .iter()
            .map(|(label, patterns)| {
                let hits: usize = segments
                    .iter()
                    .map(|s| {
                        patterns
                            .iter()
                            .map(|p| p.find_iter(s).count())
                            .sum::<usize>()
                    })
                    .sum();
                (hits, *label)
            })
            .filter(|(hits, _)| *hits > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        profile.personality_drivers = scored
            .into_iter()
            .take(4)
            .map(|(hits, label)| {
                let strength = match hits {
                    1 => "slight",
                    2 => "moderate",
                    _ => "strong",
                };
                format!("{} ({})", label, strength)
            })
            .collect();
    }

    // ------------------------------------------------------------------
    // Metadata
    // ------------------------------------------------------------------

    fn detect_aliases(&self, name: &str) -> BTreeSet<String> {
        let mut aliases = BTreeSet::new();
        for pattern in alias_patterns(name) {
            for caps in pattern.captures_iter(self.text) {
                if let Some(alias) = caps.get(1) {
                    let alias = alias.as_str();
                    if alias != name && !is_stop_name(alias) {
                        aliases.insert(alias.to_string());
                    }
                }
            }
        }
        aliases
    }

    /// `min(mentions/15, 0.3)` plus a fixed bonus per qualifying non-empty
    /// field, clamped.
    fn profile_confidence(&self, profile: &CharacterProfile, mention_count: usize) -> f64 {
        let mut confidence = (mention_count as f64 / 15.0).min(0.3);

        // Skin
        if !profile.physical_description.is_empty() {
            confidence += 0.1;
        }
        if !profile.mannerisms.is_empty() {
            confidence += 0.05;
        }
        if !profile.speech_patterns.is_empty() {
            confidence += 0.05;
        }
        if !profile.behavioral_traits.is_empty() {
            confidence += 0.05;
        }
        // Flesh
        if !profile.backstory.is_empty() {
            confidence += 0.1;
        }
        if !profile.relationships.is_empty() {
            confidence += 0.05;
        }
        if !profile.formative_experiences.is_empty() {
            confidence += 0.05;
        }
        if !profile.social_connections.is_empty() {
            confidence += 0.05;
        }
        // Core
        if !profile.motivations.is_empty() {
            confidence += 0.15;
        }
        if !profile.fears.is_empty() {
            confidence += 0.1;
        }
        if !profile.desires.is_empty() {
            confidence += 0.05;
        }
        if !profile.conflicts.is_empty() {
            confidence += 0.05;
        }
        if !profile.personality_drivers.is_empty() {
            confidence += 0.1;
        }

        clamp_unit(confidence)
    }

    fn importance(&self, name: &str, occurrences: usize, dialogue_count: usize) -> f64 {
        let frequency = if self.total_words > 0 {
            occurrences as f64 / self.total_words as f64 * 100.0
        } else {
            0.0
        };

        let name_lower = name.to_lowercase();
        let mut position_bonus = 0.0;
        if let Some(first) = self.paragraphs.first() {
            if first.to_lowercase().contains(&name_lower) {
                position_bonus += 0.2;
            }
        }
        if self.paragraphs.len() > 1 {
            if let Some(last) = self.paragraphs.last() {
                if last.to_lowercase().contains(&name_lower) {
                    position_bonus += 0.1;
                }
            }
        }

        let dialogue_bonus = (dialogue_count as f64 * 0.05).min(0.2);
        clamp_unit(frequency + position_bonus + dialogue_bonus)
    }
}

/// Derive speech-pattern labels from attributed dialogue lines.
fn speech_patterns_from(dialogue_lines: &[String]) -> Vec<String> {
    if dialogue_lines.is_empty() {
        return Vec::new();
    }

    let mut labels = Vec::new();
    let total_lines = dialogue_lines.len() as f64;

    let words: Vec<&str> = dialogue_lines
        .iter()
        .flat_map(|l| l.split_whitespace())
        .collect();
    if !words.is_empty() {
        let avg_len = words
            .iter()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).chars().count())
            .sum::<usize>() as f64
            / words.len() as f64;
        if avg_len > 5.0 {
            labels.push("sophisticated vocabulary".to_string());
        }
        if (words.len() as f64 / total_lines) < 5.0 {
            labels.push("terse".to_string());
        }
    }

    let exclaim = dialogue_lines.iter().filter(|l| l.contains('!')).count() as f64;
    let question = dialogue_lines.iter().filter(|l| l.contains('?')).count() as f64;
    if exclaim / total_lines > 0.3 {
        labels.push("exclamatory".to_string());
    }
    if question / total_lines > 0.3 {
        labels.push("inquisitive".to_string());
    }
    if dialogue_lines.iter().any(|l| l.contains("...")) {
        labels.push("hesitant".to_string());
    }

    if labels.is_empty() {
        labels.push("conversational".to_string());
    }
    dedup_capped(labels, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, raw: f64, text: &str) -> ScoredCandidate {
        ScoredCandidate {
            name: name.to_string(),
            raw_score: raw,
            confidence: 0.6,
            occurrences: crate::utilities::text::count_occurrences(text, name),
        }
    }

    const STORY: &str = "Elena was tall and weathered, with grey eyes that missed nothing. \
Elena always tapped the railing twice before climbing. Elena wanted to keep the harbor light \
burning through the storm season. Elena feared the day the oil would run out. Elena grew up \
on the cliffs with her father, a keeper before her.\n\n\
\"The light stays on, Tomas,\" Elena said. Elena struggled with the town council over funding.";

    #[test]
    fn test_builds_all_three_layers() {
        let builder = ProfileBuilder::new(STORY);
        let profile = builder.build(&candidate("Elena", 10.0, STORY), 0.2).unwrap();

        // Skin
        assert!(!profile.physical_description.is_empty());
        assert!(!profile.mannerisms.is_empty());
        assert!(!profile.speech_patterns.is_empty());
        // Flesh
        assert!(!profile.backstory.is_empty());
        assert!(profile.relationships.iter().any(|r| r.starts_with("father")));
        assert!(profile.social_connections.contains(&"Tomas".to_string()));
        // Core
        assert!(!profile.motivations.is_empty());
        assert!(!profile.fears.is_empty());
        assert!(!profile.conflicts.is_empty());

        assert!(profile.confidence_score > 0.2 && profile.confidence_score <= 1.0);
        assert!(profile.importance_score > 0.0 && profile.importance_score <= 1.0);
        assert!(!profile.first_appearance.is_empty());
        assert!(profile.text_references.len() <= 5);
    }

    #[test]
    fn test_detection_confidence_floors_sparse_profile() {
        let text = "John walked into the room.";
        let builder = ProfileBuilder::new(text);
        let mut scored = candidate("John", 2.0, text);
        scored.confidence = 0.65;
        let profile = builder.build(&scored, 0.2).unwrap();
        assert!(profile.confidence_score >= 0.65);
    }

    #[test]
    fn test_unmentioned_name_is_rejected() {
        let builder = ProfileBuilder::new(STORY);
        let result = builder.build(&candidate("Ulrich", 5.0, STORY), 0.2);
        assert!(matches!(result, Err(ProfileRejection::NoMentions { .. })));
    }

    #[test]
    fn test_malformed_name_is_rejected() {
        let builder = ProfileBuilder::new(STORY);
        let result = builder.build(&candidate("E1ena", 5.0, STORY), 0.2);
        assert!(matches!(result, Err(ProfileRejection::MalformedName { .. })));
    }

    #[test]
    fn test_alias_detection() {
        let text = "Katherine, also known as Kat, ran the forge. Katherine worked late.";
        let builder = ProfileBuilder::new(text);
        let profile = builder
            .build(&candidate("Katherine", 6.0, text), 0.0)
            .unwrap();
        assert!(profile.aliases.contains("Kat"));
    }

    #[test]
    fn test_speech_labels_from_dialogue() {
        let lines = vec!["Go!".to_string(), "Run now!".to_string()];
        let labels = speech_patterns_from(&lines);
        assert!(labels.contains(&"exclamatory".to_string()));
        assert!(labels.contains(&"terse".to_string()));
    }

    #[test]
    fn test_no_dialogue_means_no_speech_patterns() {
        assert!(speech_patterns_from(&[]).is_empty());
    }
}
