//! Cue-phrase tables for the three profile layers (skin / flesh / core).
//!
//! All patterns are scanned only inside segments that mention the candidate,
//! so they deliberately avoid embedding the name.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
        .collect()
}

// ============================================================================
// Skin layer — observable
// ============================================================================

/// Physical-description fragments.
pub static PHYSICAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:was|is|looked|appeared|seemed)\s+(?:\w+\s+){0,2}(?:tall|short|thin|slender|stocky|muscular|pale|tanned|young|old|elderly|handsome|beautiful|gaunt|frail|sturdy|weathered)[^.!?]*",
        r"(?:hair|eyes|face|skin|hands|frame|figure|build)\s+(?:was|were|like|of)[^.!?]*",
        r"(?:dark|light|grey|gray|silver|golden|auburn|black|brown|blue|green)\s+(?:hair|eyes)[^.!?]*",
        r"wore\s+[^.!?,;]+",
        r"dressed in\s+[^.!?,;]+",
    ])
});

/// Mannerism and habit fragments.
pub static MANNERISM_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:always|often|habitually|constantly|tended to|had a habit of|would always|would often)\s+[^.!?,;]+",
        r"(?:fidgeted|paced|tapped|drummed|twirled|hummed|muttered to (?:him|her)self|bit (?:his|her) nails|ran a hand through)[^.!?]*",
    ])
});

/// The 8 behavioral-trait buckets. A hit in any keyword marks the bucket's
/// label as a trait.
pub const BEHAVIORAL_BUCKETS: &[(&str, &[&str])] = &[
    (
        "aggressive",
        &["attacked", "slammed", "shouted", "threatened", "glared", "snapped at", "stormed"],
    ),
    (
        "gentle",
        &["softly", "tenderly", "gently", "soothed", "caressed", "kindly"],
    ),
    (
        "confident",
        &["strode", "declared", "assured", "boldly", "without hesitation", "commanded"],
    ),
    (
        "nervous",
        &["nervous", "nervously", "trembled", "stammered", "hesitated", "fidgeted", "anxious", "worried"],
    ),
    (
        "calm",
        &["calmly", "steady", "composed", "serene", "unhurried", "evenly"],
    ),
    (
        "energetic",
        &["rushed", "bounded", "eagerly", "lively", "darted", "sprang"],
    ),
    (
        "withdrawn",
        &["alone", "avoided", "retreated", "fell silent", "distant", "solitary", "kept to"],
    ),
    (
        "social",
        &["greeted", "chatted", "laughed with", "joined", "welcomed", "befriended"],
    ),
];

// ============================================================================
// Flesh layer — background and relationships
// ============================================================================

/// Backstory cue fragments.
pub static BACKSTORY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:grew up|was born|raised in|as a child|in (?:his|her) youth)[^.!?]*",
        r"(?:years ago|long ago|back then|had once|used to)[^.!?]*",
        r"childhood[^.!?]*",
    ])
});

/// Relationship nouns looked up as whole words near the candidate.
pub const RELATIONSHIP_NOUNS: &[&str] = &[
    "mother", "father", "sister", "brother", "friend", "wife", "husband", "daughter", "son",
    "mentor", "rival", "partner", "colleague", "neighbor", "lover", "teacher", "companion",
    "ally", "enemy",
];

/// Formative-experience cue fragments.
pub static FORMATIVE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:never forgot|changed everything|changed (?:him|her) forever|haunted (?:him|her))[^.!?]*",
        r"(?:after the (?:accident|war|fire|funeral)|the day (?:that|when)|the moment (?:that|when))[^.!?]*",
        r"(?:lost everything|survived the|shaped (?:him|her)|marked by)[^.!?]*",
    ])
});

// ============================================================================
// Core layer — psychological
// ============================================================================

/// Motivation cue fragments.
pub static MOTIVATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:wanted to|needed to|sought to|strove to|was determined to|dreamed of|hoped to|aimed to|longed to)\s+[^.!?,;]+",
        r"(?:his|her) (?:goal|ambition|mission) was[^.!?]*",
    ])
});

/// Fear cue fragments.
pub static FEAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:feared|was afraid of|was terrified of|dreaded|couldn't face)\s+[^.!?,;]+",
        r"(?:worried that|anxious about|haunted by)\s+[^.!?,;]+",
    ])
});

/// Desire cue fragments.
pub static DESIRE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:wished for|longed for|yearned for|craved|desired)\s+[^.!?,;]+",
        r"(?:wanted nothing more than|would (?:have )?give[n]? anything)\s*[^.!?,;]*",
    ])
});

/// Conflict cue fragments.
pub static CONFLICT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?:struggled with|torn between|fought against|at odds with|wrestled with)\s+[^.!?,;]+",
        r"(?:couldn't decide|was conflicted|argued with|battled?)\s*[^.!?,;]*",
    ])
});

/// The 8 personality-driver buckets scored by keyword hit count.
pub const DRIVER_BUCKETS: &[(&str, &[&str])] = &[
    (
        "ambitious",
        &["ambition", "success", "achieve", "power", "rise to", "climb", "win"],
    ),
    (
        "compassionate",
        &["help others", "cared for", "kindness", "comfort", "heal", "gentle with"],
    ),
    (
        "independent",
        &["on her own", "on his own", "own way", "self-reliant", "refused help", "independent"],
    ),
    (
        "loyal",
        &["loyal", "faithful", "devoted", "stood by", "kept (?:his|her) promise", "duty"],
    ),
    (
        "curious",
        &["curious", "wondered", "questions", "explore", "discover", "wanted to know"],
    ),
    (
        "protective",
        &["protect", "defend", "guard", "keep (?:him|her|them) safe", "shield", "watch over"],
    ),
    (
        "rebellious",
        &["rebel", "defied", "broke the rules", "refused to", "against the", "wouldn't obey"],
    ),
    (
        "perfectionist",
        &["perfect", "precise", "exact", "flawless", "meticulous", "every detail"],
    ),
];

/// Compiled driver bucket keywords (some entries are regex fragments).
pub static DRIVER_BUCKET_PATTERNS: Lazy<Vec<(&'static str, Vec<Regex>)>> = Lazy::new(|| {
    DRIVER_BUCKETS
        .iter()
        .map(|(label, keywords)| (*label, compile(keywords)))
        .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_counts() {
        assert_eq!(BEHAVIORAL_BUCKETS.len(), 8);
        assert_eq!(DRIVER_BUCKETS.len(), 8);
        assert_eq!(DRIVER_BUCKET_PATTERNS.len(), 8);
    }

    #[test]
    fn test_physical_pattern_matches_description() {
        let text = "she was tall and slender, with dark hair falling loose";
        assert!(PHYSICAL_PATTERNS.iter().any(|p| p.is_match(text)));
    }

    #[test]
    fn test_motivation_pattern_captures_goal() {
        let text = "He wanted to leave the village behind.";
        assert!(MOTIVATION_PATTERNS.iter().any(|p| p.is_match(text)));
    }

    #[test]
    fn test_driver_bucket_regex_fragments_compile() {
        let protective = DRIVER_BUCKET_PATTERNS
            .iter()
            .find(|(label, _)| *label == "protective")
            .unwrap();
        assert!(protective.1.iter().any(|p| p.is_match("sworn to keep her safe")));
    }
}
