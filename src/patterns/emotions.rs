//! Emotion tables: traditional and deep categories, intensity modifiers,
//! philosophical-concept mappings, and the cross-segment pattern lexicons.

/// One of the 10 traditional emotion categories.
pub struct EmotionDef {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// The 10 traditional emotions, in canonical order.
pub const EMOTION_CATALOG: &[EmotionDef] = &[
    EmotionDef {
        name: "joy",
        keywords: &["joy", "happy", "happiness", "delighted", "smiled", "laughed", "elated", "cheerful"],
    },
    EmotionDef {
        name: "sadness",
        keywords: &["sad", "sadness", "grief", "sorrow", "wept", "tears", "mourning", "heartbroken", "loss", "deception"],
    },
    EmotionDef {
        name: "anger",
        keywords: &["anger", "angry", "rage", "fury", "furious", "resentment", "bitter", "betrayed", "betrayal"],
    },
    EmotionDef {
        name: "fear",
        keywords: &["fear", "afraid", "terrified", "dread", "panic", "horror", "frightened", "trembling"],
    },
    EmotionDef {
        name: "trust",
        keywords: &["trust", "trusted", "faith", "relied", "depended", "confided", "safe with"],
    },
    EmotionDef {
        name: "surprise",
        keywords: &["surprise", "surprised", "astonished", "shocked", "stunned", "unexpected", "sudden"],
    },
    EmotionDef {
        name: "anticipation",
        keywords: &["anticipation", "waited", "eager", "expectation", "hoped for", "counting down", "soon"],
    },
    EmotionDef {
        name: "disgust",
        keywords: &["disgust", "disgusted", "revulsion", "repulsed", "sickened", "loathing", "contempt"],
    },
    EmotionDef {
        name: "love",
        keywords: &["love", "loved", "adored", "cherished", "devotion", "tenderness", "affection", "friend"],
    },
    EmotionDef {
        name: "hope",
        keywords: &["hope", "hoped", "hopeful", "optimism", "believed", "dream", "promise", "dawn"],
    },
];

/// Adverbial intensity modifiers: matched in the same sentence as an emotion
/// keyword, the factor multiplies the base intensity.
pub const INTENSITY_MODIFIERS: &[(&str, f64)] = &[
    ("overwhelmingly", 1.6),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("profoundly", 1.5),
    ("intensely", 1.5),
    ("deeply", 1.4),
    ("utterly", 1.4),
    ("completely", 1.3),
    ("absolutely", 1.3),
    ("very", 1.2),
    ("so", 1.1),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("a little", 0.7),
    ("barely", 0.6),
    ("faintly", 0.6),
];

/// Causal/temporal connectives: their presence deepens the context sub-score.
pub const CONNECTIVES: &[&str] = &[
    "because", "since", "therefore", "so that", "after", "before", "when", "while", "until",
    "but", "although", "then",
];

// ============================================================================
// Deep psychological categories
// ============================================================================

/// A second-order emotional category inferred from keyword + indicator clusters.
pub struct DeepEmotionDef {
    pub name: &'static str,
    /// Primary keywords (strong evidence).
    pub keywords: &'static [&'static str],
    /// Secondary indicator words (weaker, corroborating evidence).
    pub indicators: &'static [&'static str],
}

/// The 6 deep psychological categories.
pub const DEEP_EMOTION_CATALOG: &[DeepEmotionDef] = &[
    DeepEmotionDef {
        name: "existential_anxiety",
        keywords: &["meaningless", "void", "existence", "mortality", "insignificant", "absurd"],
        indicators: &["why", "purpose", "nothing", "endless", "alone in"],
    },
    DeepEmotionDef {
        name: "cognitive_dissonance",
        keywords: &["contradiction", "yet somehow", "both true", "couldn't reconcile", "paradox"],
        indicators: &["but also", "at the same time", "and yet", "impossible"],
    },
    DeepEmotionDef {
        name: "transcendent_awe",
        keywords: &["awe", "sublime", "infinite", "vast", "transcendent", "boundless"],
        indicators: &["beyond", "larger than", "dissolved", "wonder"],
    },
    DeepEmotionDef {
        name: "melancholic_nostalgia",
        keywords: &["nostalgia", "remembered when", "used to be", "long ago", "faded"],
        indicators: &["once", "back then", "never again", "old photographs"],
    },
    DeepEmotionDef {
        name: "anticipatory_dread",
        keywords: &["dread", "impending", "looming", "inevitable", "any day now"],
        indicators: &["waiting for", "knew it would", "countdown", "approaching"],
    },
    DeepEmotionDef {
        name: "cathartic_release",
        keywords: &["finally", "released", "let go", "poured out", "unburdened"],
        indicators: &["at last", "relief", "tears came", "breathed"],
    },
];

// ============================================================================
// Philosophical-concept mappings
// ============================================================================

/// Philosophical concept whose presence instantiates named emotional states.
pub struct PhilosophicalConceptDef {
    pub concept: &'static str,
    pub triggers: &'static [&'static str],
    /// Associated emotional states with their base intensities (at most 3).
    pub emotions: &'static [(&'static str, f64)],
}

/// The 8 philosophical-concept mappings.
pub const PHILOSOPHICAL_CONCEPTS: &[PhilosophicalConceptDef] = &[
    PhilosophicalConceptDef {
        concept: "consciousness",
        triggers: &["consciousness", "aware", "awareness", "perception", "the mind"],
        emotions: &[("contemplative_wonder", 0.5), ("existential_curiosity", 0.45)],
    },
    PhilosophicalConceptDef {
        concept: "mortality",
        triggers: &["death", "mortality", "mortal", "finite", "dying"],
        emotions: &[
            ("existential_anxiety", 0.55),
            ("melancholic_acceptance", 0.45),
            ("urgent_vitality", 0.4),
        ],
    },
    PhilosophicalConceptDef {
        concept: "freedom",
        triggers: &["freedom", "free will", "liberty", "unbound", "choice"],
        emotions: &[("liberated_exhilaration", 0.5), ("responsibility_weight", 0.4)],
    },
    PhilosophicalConceptDef {
        concept: "truth",
        triggers: &["truth", "honesty", "reality", "illusion"],
        emotions: &[("clarifying_resolve", 0.45), ("disillusioned_unease", 0.4)],
    },
    PhilosophicalConceptDef {
        concept: "identity",
        triggers: &["identity", "self", "who am i", "who we are"],
        emotions: &[("introspective_searching", 0.5), ("fragmented_uncertainty", 0.4)],
    },
    PhilosophicalConceptDef {
        concept: "meaning",
        triggers: &["meaning", "purpose", "significance", "why we"],
        emotions: &[
            ("existential_yearning", 0.55),
            ("philosophical_wonder", 0.45),
            ("quiet_despair", 0.35),
        ],
    },
    PhilosophicalConceptDef {
        concept: "love",
        triggers: &["love", "devotion", "longing", "beloved"],
        emotions: &[("transcendent_connection", 0.5), ("vulnerable_openness", 0.45)],
    },
    PhilosophicalConceptDef {
        concept: "suffering",
        triggers: &["suffering", "pain", "anguish", "torment"],
        emotions: &[("compassionate_sorrow", 0.5), ("endurance_resolve", 0.4)],
    },
];

// ============================================================================
// Cross-segment pattern lexicons
// ============================================================================

/// Named transitions between consecutive emotional states, keyed on the base
/// emotion word of each label (see [`base_emotion`]).
pub const TRANSITION_LEXICON: &[(&str, &str, &str)] = &[
    ("anxiety", "relief", "cathartic_release"),
    ("fear", "joy", "cathartic_release"),
    ("fear", "hope", "emerging_courage"),
    ("sadness", "hope", "emerging_resilience"),
    ("sadness", "joy", "emotional_recovery"),
    ("hope", "sadness", "dashed_hope"),
    ("joy", "sadness", "bittersweet_turn"),
    ("anger", "sadness", "deflated_rage"),
    ("joy", "fear", "creeping_unease"),
    ("trust", "anger", "wounded_betrayal"),
];

/// Opposite-emotion pairs whose co-presence marks an inner contradiction.
pub const OPPOSITE_PAIRS: &[(&str, &str, &str)] = &[
    ("love", "anger", "love_hate_tension"),
    ("joy", "sadness", "bittersweet_conflict"),
    ("trust", "fear", "anxious_attachment"),
    ("hope", "dread", "hope_dread_oscillation"),
    ("anticipation", "disgust", "reluctant_fascination"),
];

/// Subtext phrases indicating a suppressed emotion.
pub const SUPPRESSION_CUES: &[(&str, &str)] = &[
    ("forced a smile", "suppressed_anger"),
    ("forced herself to smile", "suppressed_anger"),
    ("forced himself to smile", "suppressed_anger"),
    ("bit back", "suppressed_anger"),
    ("swallowed hard", "suppressed_fear"),
    ("held back tears", "suppressed_grief"),
    ("blinked back tears", "suppressed_grief"),
    ("said nothing", "suppressed_resentment"),
    ("kept his voice steady", "suppressed_fear"),
    ("kept her voice steady", "suppressed_fear"),
    ("pretended not to", "suppressed_longing"),
    ("looked away", "suppressed_shame"),
];

/// Extract the base emotion word from a (possibly compound) label:
/// `existential_anxiety` -> `anxiety`, `joy` -> `joy`.
pub fn base_emotion(label: &str) -> &str {
    label.rsplit('_').next().unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(EMOTION_CATALOG.len(), 10);
        assert_eq!(DEEP_EMOTION_CATALOG.len(), 6);
        assert_eq!(PHILOSOPHICAL_CONCEPTS.len(), 8);
    }

    #[test]
    fn test_base_emotion_strips_qualifier() {
        assert_eq!(base_emotion("existential_anxiety"), "anxiety");
        assert_eq!(base_emotion("joy"), "joy");
        assert_eq!(base_emotion("anticipatory_dread"), "dread");
    }

    #[test]
    fn test_transition_lexicon_covers_cathartic_release() {
        assert!(TRANSITION_LEXICON
            .iter()
            .any(|(from, to, label)| *from == "anxiety" && *to == "relief" && *label == "cathartic_release"));
    }
}
