//! Character-name pattern families, the stop-list, and synthesis lookup tables.
//!
//! The six extraction families and their weights are the contract the
//! candidate extractor tallies against; the context/alias patterns are
//! compiled per-candidate because they embed the (escaped) name.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// Stop-list
// ============================================================================

/// Capitalized tokens that are never character names: sentence-starting common
/// words, days, months, continents/directions, and religious terms.
pub const NAME_STOP_LIST: &[&str] = &[
    // Common words that start sentences
    "The", "This", "That", "These", "Those", "There", "Then", "When", "Where", "What", "Who",
    "Why", "How", "And", "But", "Or", "Nor", "For", "Yet", "So", "His", "Her", "She", "He",
    "They", "Them", "It", "Its", "We", "You", "If", "Not", "No", "Yes", "All", "Some", "One",
    "Two", "Three", "First", "Last", "Many", "Most", "More", "Every", "Each", "Both", "Other",
    "Another", "Such", "Very", "Just", "Only", "Even", "Still", "Also", "After", "Before",
    "During", "While", "Since", "Until", "Because", "Though", "Although", "However", "Perhaps",
    "Maybe", "Indeed", "Instead", "Meanwhile", "Suddenly", "Finally", "Eventually", "Once",
    "Now", "Today", "Tomorrow", "Yesterday", "Here", "Everything", "Nothing", "Someone",
    "Everyone", "Nobody",
    // Days
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    // Months
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
    // Continents and directions
    "Africa", "America", "Antarctica", "Asia", "Australia", "Europe", "North", "South", "East",
    "West",
    // Religious terms
    "God", "Lord", "Jesus", "Christ", "Allah", "Buddha", "Heaven", "Hell",
];

/// Whether a candidate name (or any of its tokens) is on the stop-list.
pub fn is_stop_name(name: &str) -> bool {
    name.split_whitespace()
        .all(|token| NAME_STOP_LIST.contains(&token))
        || NAME_STOP_LIST.contains(&name)
}

// ============================================================================
// Extraction families (weights per family)
// ============================================================================

/// Weight for a `First Last` (optionally `First Middle Last`) match.
pub const WEIGHT_FULL_NAME: f64 = 3.0;
/// Weight per occurrence of a repeated single capitalized token.
pub const WEIGHT_CAP_TOKEN: f64 = 1.0;
/// Weight for a dialogue-attribution match (`Name said ...`).
pub const WEIGHT_DIALOGUE: f64 = 4.0;
/// Weight for a possessive match (`Name's`).
pub const WEIGHT_POSSESSIVE: f64 = 2.0;
/// Weight for a direct address inside quotes.
pub const WEIGHT_DIRECT_ADDRESS: f64 = 3.0;
/// Weight for an action-attribution match (`Name walked ...`).
pub const WEIGHT_ACTION: f64 = 2.0;

pub static FULL_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?: [A-Z][a-z]+){1,2})\b").unwrap());

pub static CAP_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+)\b").unwrap());

/// Verbs of speech used by dialogue attribution and by quoted-speech capture.
pub const SPEECH_VERBS: &str =
    "said|asked|replied|whispered|shouted|muttered|answered|exclaimed|cried|called|murmured|snapped";

pub static DIALOGUE_ATTRIBUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b([A-Z][a-z]+)\s+(?:{})\b", SPEECH_VERBS)).unwrap()
});

pub static POSSESSIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+)'s\b").unwrap());

/// Vocative at the start of a quote: `"Marcus, ...`.
pub static DIRECT_ADDRESS_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([A-Z][a-z]+)[,!]"#).unwrap());

/// Vocative at the end of a quote: `..., Marcus."`.
pub static DIRECT_ADDRESS_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#", ([A-Z][a-z]+)[.!?]""#).unwrap());

/// Narrative action/state verbs. Auxiliaries are included deliberately:
/// `Marcus had been her friend` is attribution evidence too.
pub const ACTION_VERBS: &str = "walked|ran|stood|sat|looked|turned|moved|smiled|laughed|nodded|\
grabbed|opened|closed|entered|left|arrived|stepped|reached|stared|watched|waited|greeted|\
followed|stopped|paused|leaned|knelt|rose|climbed|drove|wrote|read|spoke|listened|was|were|\
had|did|felt|knew|thought|wanted|would|could|remembered|realized|wondered|decided";

pub static ACTION_ATTRIBUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b([A-Z][a-z]+)\s+(?:{})\b", ACTION_VERBS)).unwrap()
});

// ============================================================================
// Per-candidate patterns (embed the escaped name)
// ============================================================================

/// Context patterns that make a name read like a character: verbs of being,
/// reaction verbs, and body/emotion noun possessives.
pub fn character_context_patterns(name: &str) -> Vec<Regex> {
    let escaped = regex::escape(name);
    [
        format!(
            r"(?i)\b{}\s+(?:was|is|felt|seemed|appeared|became|looked|sounded)\b",
            escaped
        ),
        format!(
            r"(?i)\b{}\s+(?:smiled|laughed|cried|sighed|frowned|gasped|trembled|shivered|wept|grinned)\b",
            escaped
        ),
        format!(
            r"(?i)\b{}'s\s+(?:face|eyes|hands|heart|mind|voice|smile|shoulders|breath)\b",
            escaped
        ),
        format!(
            r"(?i)\b(?:face|eyes|heart|voice|thoughts)\s+of\s+{}\b",
            escaped
        ),
    ]
    .into_iter()
    .map(|p| Regex::new(&p).unwrap())
    .collect()
}

/// Alias patterns: "also known as", "nicknamed", and parenthetical forms.
pub fn alias_patterns(name: &str) -> Vec<Regex> {
    let escaped = regex::escape(name);
    [
        format!(
            r#"{},?\s+(?:also\s+)?known\s+as\s+"?([A-Z][a-z]+)"?"#,
            escaped
        ),
        format!(r#"{},?\s+nicknamed\s+"?([A-Z][a-z]+)"?"#, escaped),
        format!(r"{}\s+\(([A-Z][a-z]+)\)", escaped),
    ]
    .into_iter()
    .map(|p| Regex::new(&p).unwrap())
    .collect()
}

/// Quoted speech attributed to the name, both orders:
/// `"..." Name said` and `Name said, "..."`.
pub fn quoted_speech_patterns(name: &str) -> Vec<Regex> {
    let escaped = regex::escape(name);
    [
        format!(r#""([^"]+)"\s*,?\s*{}\s+(?:{})"#, escaped, SPEECH_VERBS),
        format!(r#"{}\s+(?:{})\s*,?\s*"([^"]+)""#, escaped, SPEECH_VERBS),
    ]
    .into_iter()
    .map(|p| Regex::new(&p).unwrap())
    .collect()
}

// ============================================================================
// Conceptual synthesis tables
// ============================================================================

/// Archetype name for a recurring abstract concept. Unmapped concepts fall
/// back to the capitalized concept word (with ordinal suffixes on collision).
pub fn concept_archetype_name(concept: &str) -> Option<&'static str> {
    match concept {
        "consciousness" => Some("The Dreamer"),
        "existence" => Some("The Seeker"),
        "freedom" => Some("The Wanderer"),
        "truth" => Some("The Witness"),
        "time" => Some("The Keeper"),
        "memory" => Some("The Archivist"),
        "love" => Some("The Devoted"),
        "mortality" => Some("The Mourner"),
        "knowledge" => Some("The Scholar"),
        "morality" => Some("The Judge"),
        "meaning" => Some("The Seeker"),
        "identity" => Some("The Mirror"),
        _ => None,
    }
}

/// Trait/motivation/fear/desire rows for a synthesized concept character.
pub struct ConceptTraits {
    pub traits: &'static [&'static str],
    pub motivations: &'static [&'static str],
    pub fears: &'static [&'static str],
    pub desires: &'static [&'static str],
}

pub fn concept_traits(concept: &str) -> Option<ConceptTraits> {
    match concept {
        "consciousness" => Some(ConceptTraits {
            traits: &["introspective", "lucid", "restless"],
            motivations: &["to understand the nature of awareness"],
            fears: &["dissolving into unexamined habit"],
            desires: &["a moment of perfect clarity"],
        }),
        "freedom" => Some(ConceptTraits {
            traits: &["untethered", "defiant", "searching"],
            motivations: &["to live unbound by imposed limits"],
            fears: &["walls closing in unnoticed"],
            desires: &["an open horizon"],
        }),
        "love" => Some(ConceptTraits {
            traits: &["devoted", "vulnerable", "generous"],
            motivations: &["to hold connection against loss"],
            fears: &["loving what cannot stay"],
            desires: &["to be known completely"],
        }),
        "mortality" => Some(ConceptTraits {
            traits: &["somber", "attentive", "unflinching"],
            motivations: &["to make finite time matter"],
            fears: &["an ending that erases meaning"],
            desires: &["peace with impermanence"],
        }),
        "truth" => Some(ConceptTraits {
            traits: &["unsparing", "patient", "exacting"],
            motivations: &["to see things as they are"],
            fears: &["comfortable illusions"],
            desires: &["one honest answer"],
        }),
        "time" => Some(ConceptTraits {
            traits: &["deliberate", "nostalgic", "watchful"],
            motivations: &["to keep what passing moments leave behind"],
            fears: &["forgetting and being forgotten"],
            desires: &["a moment that lasts"],
        }),
        "knowledge" => Some(ConceptTraits {
            traits: &["curious", "methodical", "humble"],
            motivations: &["to map the edges of the known"],
            fears: &["questions with no answers"],
            desires: &["understanding that changes everything"],
        }),
        "identity" => Some(ConceptTraits {
            traits: &["shifting", "questioning", "self-aware"],
            motivations: &["to find a self that holds"],
            fears: &["being only a reflection"],
            desires: &["a name that fits"],
        }),
        _ => None,
    }
}

/// Generic fallback rows for unmapped concepts, templated on the concept word.
pub fn generic_concept_traits(concept: &str) -> (Vec<String>, Vec<String>, Vec<String>, Vec<String>) {
    (
        vec![
            "contemplative".to_string(),
            format!("shaped by {}", concept),
        ],
        vec![format!("to understand {}", concept)],
        vec![format!("losing grasp of {}", concept)],
        vec![format!("to embody {}", concept)],
    )
}
