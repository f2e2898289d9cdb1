//! Content-type classification and processing-strategy selection.
//!
//! Scores the input against narrative / conceptual / descriptive indicator
//! lists plus structural heuristics, then maps the winning category to a
//! processing strategy. Pure function of the input text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::patterns::names::ACTION_ATTRIBUTION;
use crate::utilities::text::capitalized_words;

/// Detected content category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Narrative,
    Conceptual,
    Descriptive,
    Mixed,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Narrative => "narrative",
            Self::Conceptual => "conceptual",
            Self::Descriptive => "descriptive",
            Self::Mixed => "mixed",
        }
    }
}

/// How characters should be obtained for the detected content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStrategy {
    /// Extract named entities from narrative prose.
    Extract,
    /// Synthesize characters from concepts (conceptual/philosophical text).
    Create,
    /// Use the explicit description as-is (structured character sheets).
    UseExplicit,
    /// Try extraction, fall back to synthesis.
    Hybrid,
}

impl ProcessingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extract => "extract",
            Self::Create => "create",
            Self::UseExplicit => "use_explicit",
            Self::Hybrid => "hybrid",
        }
    }
}

/// Raw category scores plus the derived classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeResult {
    pub content_type: ContentType,
    pub processing_strategy: ProcessingStrategy,
    pub narrative_score: f64,
    pub conceptual_score: f64,
    pub descriptive_score: f64,
    /// Share of the winning category in the total score (0 when all zero).
    pub confidence: f64,
    /// `1 - (top_share - second_share)`; 1.0 when all scores are zero.
    pub ambiguity: f64,
}

const NARRATIVE_INDICATORS: &[&str] = &[
    "once upon", "one day", "that day", "later that", "and then", "suddenly", "the story",
    "chapter", "she said", "he said", "they went", "it began", "at first", "in the end",
];

const CONCEPTUAL_INDICATORS: &[&str] = &[
    "the nature of", "the meaning of", "the essence of", "existence", "consciousness",
    "what is", "what does it mean", "philosophy", "truth itself", "reality", "the question of",
    "one might ask", "to be is", "the self",
];

const DESCRIPTIVE_INDICATORS: &[&str] = &[
    "name:", "age:", "height:", "appearance:", "personality:", "background:", "occupation:",
    "traits:", "likes:", "dislikes:", "years old", "is known for", "is described as",
    "can be described",
];

static PAST_TENSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z]+ed\b").unwrap());
static QUOTED_DIALOGUE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]+""#).unwrap());

static PHILOSOPHICAL_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bthe (?:nature|essence|meaning) of \w+",
        r"(?i)\bwhat (?:is|does it mean)\b",
        r"(?i)\bwhy (?:do|are|is) we\b",
        r"(?i)\bto be \w+ is to\b",
        r"(?i)\bone cannot \w+ without\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Classify text and select a processing strategy.
pub fn classify(text: &str) -> ContentTypeResult {
    let lower = text.to_lowercase();

    let indicator_hits = |indicators: &[&str]| -> f64 {
        indicators.iter().filter(|i| lower.contains(*i)).count() as f64
    };

    let mut narrative = indicator_hits(NARRATIVE_INDICATORS);
    let mut conceptual = indicator_hits(CONCEPTUAL_INDICATORS);
    let mut descriptive = indicator_hits(DESCRIPTIVE_INDICATORS);

    // Structured character sheets lean on colons.
    if text.matches(':').count() > 3 {
        descriptive += 2.0;
    }

    // Quoted dialogue is a strong narrative signal.
    if QUOTED_DIALOGUE.is_match(text) {
        narrative += 3.0;
    }

    // Past-tense density beyond a baseline of 3 occurrences.
    let past_tense = PAST_TENSE.find_iter(&lower).count();
    if past_tense > 3 {
        narrative += 2.0 * (past_tense - 3) as f64;
    }

    // Capitalized name followed by an action verb.
    if ACTION_ATTRIBUTION.find_iter(text).count() > 2 {
        narrative += 3.0;
    }

    // Each distinct philosophical phrase counts once.
    for pattern in PHILOSOPHICAL_PHRASES.iter() {
        let mut seen: Vec<&str> = Vec::new();
        for m in pattern.find_iter(text) {
            if !seen.contains(&m.as_str()) {
                seen.push(m.as_str());
                conceptual += 1.0;
            }
        }
    }

    // Winner by max score; ties resolve descriptive > conceptual > narrative.
    let content_type = if narrative == 0.0 && conceptual == 0.0 && descriptive == 0.0 {
        ContentType::Mixed
    } else if descriptive >= conceptual && descriptive >= narrative {
        ContentType::Descriptive
    } else if conceptual >= narrative {
        ContentType::Conceptual
    } else {
        ContentType::Narrative
    };

    let processing_strategy = match content_type {
        ContentType::Narrative => ProcessingStrategy::Extract,
        ContentType::Conceptual => ProcessingStrategy::Create,
        ContentType::Descriptive => ProcessingStrategy::UseExplicit,
        ContentType::Mixed => {
            if capitalized_words(text).len() > 10 {
                ProcessingStrategy::Extract
            } else {
                ProcessingStrategy::Hybrid
            }
        }
    };

    let total = narrative + conceptual + descriptive;
    let (confidence, ambiguity) = if total > 0.0 {
        let mut shares = [narrative / total, conceptual / total, descriptive / total];
        shares.sort_by(|a, b| b.partial_cmp(a).unwrap());
        (shares[0], 1.0 - (shares[0] - shares[1]))
    } else {
        (0.0, 1.0)
    };

    ContentTypeResult {
        content_type,
        processing_strategy,
        narrative_score: narrative,
        conceptual_score: conceptual,
        descriptive_score: descriptive,
        confidence,
        ambiguity,
    }
}
