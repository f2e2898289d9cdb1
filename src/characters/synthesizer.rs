//! Conceptual character synthesis.
//!
//! When the classifier selects the `create` strategy there are no named
//! entities to extract; characters are synthesized from the text's recurring
//! abstract concepts instead. Synthesis is definitionally successful, so the
//! scores are fixed rather than evidence-derived.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::characters::profile::CharacterProfile;
use crate::patterns::names::{concept_archetype_name, concept_traits, generic_concept_traits};
use crate::utilities::text::truncate_with_ellipsis;

/// Confidence for synthesized profiles (synthesis cannot "miss").
const SYNTHETIC_CONFIDENCE: f64 = 0.8;
/// Importance for synthesized profiles (they carry the whole text's weight).
const SYNTHETIC_IMPORTANCE: f64 = 0.9;

/// Abstract-concept vocabulary: consciousness, freedom, emotion, morality,
/// time, and knowledge families.
static CONCEPT_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(consciousness|awareness|mind|existence|being|mortality|death|freedom|liberty|choice|love|longing|sorrow|joy|suffering|morality|virtue|justice|time|memory|eternity|knowledge|truth|wisdom|understanding|meaning|purpose|identity|self|beauty)\b",
    )
    .unwrap()
});

/// Thematic-statement fragments: `the nature of X`, `the essence of X`, ...
static THEMATIC_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bthe (?:nature|essence|meaning|heart|weight|question) of \w+(?: \w+){0,3}")
        .unwrap()
});

/// Up to 5 recurring concepts, most frequent first (name as tiebreaker).
pub fn extract_concepts(text: &str) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for m in CONCEPT_VOCABULARY.find_iter(text) {
        *counts.entry(m.as_str().to_lowercase()).or_insert(0) += 1;
    }
    let mut concepts: Vec<(String, usize)> = counts.into_iter().collect();
    concepts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    concepts.truncate(5);
    concepts
}

/// Up to 3 thematic-statement fragments.
pub fn extract_thematic_statements(text: &str) -> Vec<String> {
    THEMATIC_STATEMENT
        .find_iter(text)
        .take(3)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Synthesize characters from the text's top concepts (at most 3).
pub fn synthesize_characters(text: &str) -> Vec<CharacterProfile> {
    let concepts = extract_concepts(text);
    let statements = extract_thematic_statements(text);
    let excerpt = truncate_with_ellipsis(text.trim(), 120);

    let mut used_names: Vec<String> = Vec::new();
    let mut profiles = Vec::new();

    for (concept, _count) in concepts.into_iter().take(3) {
        let base_name = concept_archetype_name(&concept)
            .map(str::to_string)
            .unwrap_or_else(|| capitalize(&concept));
        let name = ordinal_disambiguate(&base_name, &used_names);
        used_names.push(name.clone());

        let mut profile = CharacterProfile::new(&name);
        profile.content_type = "conceptual".to_string();
        profile.conceptual_basis = std::iter::once(concept.clone())
            .chain(statements.iter().cloned())
            .collect();
        profile.backstory = format!(
            "An embodiment of {} drawn from the text's own meditation: \"{}\"",
            concept, excerpt
        );
        profile.first_appearance = excerpt.clone();
        profile.text_references = statements.clone();

        match concept_traits(&concept) {
            Some(rows) => {
                profile.behavioral_traits =
                    rows.traits.iter().map(|s| s.to_string()).collect();
                profile.motivations =
                    rows.motivations.iter().map(|s| s.to_string()).collect();
                profile.fears = rows.fears.iter().map(|s| s.to_string()).collect();
                profile.desires = rows.desires.iter().map(|s| s.to_string()).collect();
            }
            None => {
                let (traits, motivations, fears, desires) = generic_concept_traits(&concept);
                profile.behavioral_traits = traits;
                profile.motivations = motivations;
                profile.fears = fears;
                profile.desires = desires;
            }
        }

        profile.personality_drivers = vec![format!("drawn toward {}", concept)];
        profile.confidence_score = SYNTHETIC_CONFIDENCE;
        profile.importance_score = SYNTHETIC_IMPORTANCE;
        profiles.push(profile);
    }

    profiles
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Append an ordinal suffix when the base name is already taken.
fn ordinal_disambiguate(base: &str, used: &[String]) -> String {
    if !used.iter().any(|u| u == base) {
        return base.to_string();
    }
    for suffix in ["II", "III", "IV"] {
        let candidate = format!("{} {}", base, suffix);
        if !used.contains(&candidate) {
            return candidate;
        }
    }
    format!("{} V", base)
}
