//! Analysis orchestration.
//!
//! Sequences the pipeline: classification, character detection or synthesis
//! (dispatched by strategy), theme analysis, emotional-arc analysis, setting
//! extraction, and text-complexity scoring, merged into one result object.
//! Also exposes the clarification-request flow for ambiguous input.

use std::sync::Arc;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::characters::{
    extract_candidates, score_candidates, synthesize_characters, CharacterProfile, ProfileBuilder,
};
use crate::classifier::{classify, ContentType, ContentTypeResult, ProcessingStrategy};
use crate::emotions::{analyze_emotional_arc, EmotionalState};
use crate::themes::{analyze_themes, NarrativeTheme};
use crate::utilities::cancel::CancelToken;
use crate::utilities::config::AnalyzerConfig;
use crate::utilities::errors::AnalysisError;
use crate::utilities::sink::{NoopSink, ProgressSink};
use crate::utilities::text::{clamp_unit, clean_words, sentences, truncate_with_ellipsis};

/// Caller-supplied hint about the content kind; suppresses the
/// clarification gate and overrides the detected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserGuidance {
    CharacterDescription,
    NarrativeFiction,
    PhilosophicalConceptual,
    PoeticContent,
    MixedContent,
}

impl UserGuidance {
    /// The content type and strategy this guidance pins.
    pub fn resolve(&self) -> (ContentType, ProcessingStrategy) {
        match self {
            Self::CharacterDescription => (ContentType::Descriptive, ProcessingStrategy::UseExplicit),
            Self::NarrativeFiction => (ContentType::Narrative, ProcessingStrategy::Extract),
            Self::PhilosophicalConceptual => (ContentType::Conceptual, ProcessingStrategy::Create),
            Self::PoeticContent => (ContentType::Conceptual, ProcessingStrategy::Create),
            Self::MixedContent => (ContentType::Mixed, ProcessingStrategy::Hybrid),
        }
    }
}

/// Counts and provenance attached to every analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub character_count: usize,
    pub theme_count: usize,
    pub emotional_states_count: usize,
    pub text_length: usize,
    pub analyzer_version: String,
    /// Wall-clock duration; the only field allowed to vary between
    /// identical runs.
    pub processing_time_ms: f64,
}

/// Aggregate analysis result — the engine's output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub characters: Vec<CharacterProfile>,
    pub narrative_themes: Vec<NarrativeTheme>,
    pub emotional_arc: Vec<EmotionalState>,
    pub setting_description: String,
    pub text_complexity: f64,
    pub detected_content_type: String,
    pub processing_strategy: String,
    pub analysis_metadata: AnalysisMetadata,
}

/// One selectable option in a clarification response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationOption {
    pub id: String,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Structured request for more information instead of a guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationRequest {
    /// Always `true`; kept explicit so consumers can branch on the flag.
    pub clarification_needed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_analysis: Option<ContentTypeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub prompts: Vec<String>,
    pub options: Vec<ClarificationOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,
}

/// Outcome of `analyze_character_text`: a full analysis or a clarification
/// request. Serialized untagged so consumers see the plain object shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacterAnalysisOutcome {
    Analysis(Box<TextAnalysis>),
    Clarification(ClarificationRequest),
}

static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:at|in|inside|near|beneath|atop|beside) the ([a-z]+(?: [a-z]+)?)\b")
        .unwrap()
});

const TIMES_OF_DAY: &[&str] = &[
    "dawn", "morning", "noon", "afternoon", "dusk", "evening", "night", "midnight",
];

const SEASONS: &[&str] = &["spring", "summer", "autumn", "fall", "winter"];

/// Sequences the analysis passes and carries the injected configuration and
/// progress sink. Instances are immutable; calls share no mutable state.
pub struct AnalysisOrchestrator {
    config: AnalyzerConfig,
    sink: Arc<dyn ProgressSink>,
}

impl Default for AnalysisOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisOrchestrator {
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            sink: Arc::new(NoopSink),
        }
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            config,
            sink: Arc::new(NoopSink),
        }
    }

    /// Replace the progress sink.
    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the full pipeline. Infallible apart from cancellation, which
    /// cannot occur without a token.
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        match self.run(text, None, None) {
            Ok(analysis) => analysis,
            // No token was supplied, so cancellation is unreachable; return
            // an empty-input analysis rather than panicking.
            Err(_) => self.empty_analysis(),
        }
    }

    /// Run the full pipeline with a cancellation token checked at the
    /// per-segment and per-candidate loops.
    pub fn analyze_text_with_cancel(
        &self,
        text: &str,
        cancel: &CancelToken,
    ) -> Result<TextAnalysis, AnalysisError> {
        self.run(text, None, Some(cancel))
    }

    /// Pre-checked entry point: gates on text length and content-type
    /// ambiguity, returning a clarification request instead of guessing.
    /// Internal failures are converted into a clarification response
    /// carrying the error text; this method never propagates errors.
    pub fn analyze_character_text(
        &self,
        text: &str,
        user_guidance: Option<UserGuidance>,
    ) -> CharacterAnalysisOutcome {
        if text.trim().chars().count() < 10 {
            return CharacterAnalysisOutcome::Clarification(self.short_text_clarification(text));
        }

        let content = classify(text);
        let ambiguous = content.confidence < self.config.clarification_confidence_floor
            || content.ambiguity > self.config.ambiguity_ceiling;
        if ambiguous && user_guidance.is_none() {
            return CharacterAnalysisOutcome::Clarification(
                self.ambiguity_clarification(text, content),
            );
        }

        match self.run(text, user_guidance, None) {
            Ok(analysis) => CharacterAnalysisOutcome::Analysis(Box::new(analysis)),
            Err(error) => CharacterAnalysisOutcome::Clarification(ClarificationRequest {
                clarification_needed: true,
                content_analysis: None,
                error: Some(error.to_string()),
                prompts: vec![
                    "Analysis could not be completed. Please retry, or describe the characters directly.".to_string(),
                ],
                options: guidance_options(),
                text_preview: Some(truncate_with_ellipsis(text, 200)),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    fn run(
        &self,
        text: &str,
        user_guidance: Option<UserGuidance>,
        cancel: Option<&CancelToken>,
    ) -> Result<TextAnalysis, AnalysisError> {
        let started = Instant::now();

        let classified = classify(text);
        let (content_type, strategy) = match user_guidance {
            Some(guidance) => guidance.resolve(),
            None => (classified.content_type, classified.processing_strategy),
        };
        self.sink.info(&format!(
            "content type {} -> strategy {}",
            content_type.as_str(),
            strategy.as_str()
        ));

        let characters = self.detect_characters(text, strategy, cancel)?;
        self.sink
            .info(&format!("{} character(s) detected", characters.len()));

        let narrative_themes = analyze_themes(text, self.config.max_themes);
        let emotional_arc = analyze_emotional_arc(text, &self.config, cancel)?;

        let analysis_metadata = AnalysisMetadata {
            character_count: characters.len(),
            theme_count: narrative_themes.len(),
            emotional_states_count: emotional_arc.len(),
            text_length: text.len(),
            analyzer_version: crate::VERSION.to_string(),
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        };

        Ok(TextAnalysis {
            characters,
            narrative_themes,
            emotional_arc,
            setting_description: extract_setting(text),
            text_complexity: text_complexity(text),
            detected_content_type: content_type.as_str().to_string(),
            processing_strategy: strategy.as_str().to_string(),
            analysis_metadata,
        })
    }

    fn detect_characters(
        &self,
        text: &str,
        strategy: ProcessingStrategy,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<CharacterProfile>, AnalysisError> {
        match strategy {
            // Descriptive text names its subject explicitly; the extraction
            // path reads those names directly.
            ProcessingStrategy::Extract | ProcessingStrategy::UseExplicit => {
                self.extract_profiles(text, cancel)
            }
            ProcessingStrategy::Create => Ok(synthesize_characters(text)),
            ProcessingStrategy::Hybrid => {
                let extracted = self.extract_profiles(text, cancel)?;
                // The scorer already discards candidates under the 0.3
                // confidence floor, so in practice only an empty extraction
                // triggers the fallback.
                let weak = extracted.iter().all(|p| p.confidence_score < 0.3);
                if extracted.is_empty() || weak {
                    self.sink.info("extraction inconclusive; synthesizing");
                    Ok(synthesize_characters(text))
                } else {
                    Ok(extracted)
                }
            }
        }
    }

    fn extract_profiles(
        &self,
        text: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<CharacterProfile>, AnalysisError> {
        let tally = extract_candidates(text);
        let scored = score_candidates(text, &tally, self.config.candidate_confidence_floor);
        let builder = ProfileBuilder::new(text);

        let mut profiles = Vec::new();
        for candidate in &scored {
            if let Some(token) = cancel {
                token.check()?;
            }
            match builder.build(candidate, self.config.profile_confidence_floor) {
                Ok(profile) => profiles.push(profile),
                Err(rejection) => self.sink.error(&format!("candidate skipped: {}", rejection)),
            }
            if profiles.len() == self.config.max_characters {
                break;
            }
        }
        Ok(profiles)
    }

    // ------------------------------------------------------------------
    // Clarification responses
    // ------------------------------------------------------------------

    fn short_text_clarification(&self, text: &str) -> ClarificationRequest {
        ClarificationRequest {
            clarification_needed: true,
            content_analysis: None,
            error: None,
            prompts: vec![
                "The text is too short to analyze reliably. Could you provide a longer passage or a fuller description?".to_string(),
                "Alternatively, tell me what kind of content this is and what you want from it.".to_string(),
            ],
            options: guidance_options(),
            text_preview: if text.is_empty() {
                None
            } else {
                Some(truncate_with_ellipsis(text, 200))
            },
        }
    }

    fn ambiguity_clarification(
        &self,
        text: &str,
        content: ContentTypeResult,
    ) -> ClarificationRequest {
        // Rank the three categories by score for the options list.
        let total =
            (content.narrative_score + content.conceptual_score + content.descriptive_score).max(1.0);
        let mut ranked = vec![
            (
                content.narrative_score / total,
                UserGuidance::NarrativeFiction,
                "Narrative fiction",
                "A story with named characters and events; characters will be extracted.",
            ),
            (
                content.conceptual_score / total,
                UserGuidance::PhilosophicalConceptual,
                "Philosophical / conceptual",
                "Abstract or poetic content; characters will be synthesized from its concepts.",
            ),
            (
                content.descriptive_score / total,
                UserGuidance::CharacterDescription,
                "Character description",
                "An explicit description; it will be used as-is.",
            ),
        ];
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut options: Vec<ClarificationOption> = ranked
            .into_iter()
            .map(|(share, guidance, label, description)| ClarificationOption {
                id: guidance_id(guidance),
                label: label.to_string(),
                description: description.to_string(),
                confidence: Some(clamp_unit(share)),
            })
            .collect();
        options.push(ClarificationOption {
            id: guidance_id(UserGuidance::MixedContent),
            label: "Mixed content".to_string(),
            description: "A blend; extraction will be tried first with synthesis as fallback."
                .to_string(),
            confidence: None,
        });

        ClarificationRequest {
            clarification_needed: true,
            content_analysis: Some(content),
            error: None,
            prompts: vec![
                "The content type is ambiguous. Which best describes this text?".to_string(),
            ],
            options,
            text_preview: Some(truncate_with_ellipsis(text, 200)),
        }
    }

    fn empty_analysis(&self) -> TextAnalysis {
        TextAnalysis {
            characters: Vec::new(),
            narrative_themes: Vec::new(),
            emotional_arc: Vec::new(),
            setting_description: "unspecified".to_string(),
            text_complexity: 0.0,
            detected_content_type: ContentType::Mixed.as_str().to_string(),
            processing_strategy: ProcessingStrategy::Hybrid.as_str().to_string(),
            analysis_metadata: AnalysisMetadata {
                character_count: 0,
                theme_count: 0,
                emotional_states_count: 0,
                text_length: 0,
                analyzer_version: crate::VERSION.to_string(),
                processing_time_ms: 0.0,
            },
        }
    }
}

fn guidance_id(guidance: UserGuidance) -> String {
    // serde_json renders the snake_case wire name; strip the quotes.
    serde_json::to_string(&guidance)
        .unwrap_or_default()
        .trim_matches('"')
        .to_string()
}

fn guidance_options() -> Vec<ClarificationOption> {
    vec![
        ClarificationOption {
            id: guidance_id(UserGuidance::CharacterDescription),
            label: "Character description".to_string(),
            description: "An explicit description of one or more characters.".to_string(),
            confidence: None,
        },
        ClarificationOption {
            id: guidance_id(UserGuidance::NarrativeFiction),
            label: "Narrative fiction".to_string(),
            description: "A story; characters will be extracted from the prose.".to_string(),
            confidence: None,
        },
        ClarificationOption {
            id: guidance_id(UserGuidance::PhilosophicalConceptual),
            label: "Philosophical / conceptual".to_string(),
            description: "Abstract content; characters will be synthesized from concepts."
                .to_string(),
            confidence: None,
        },
        ClarificationOption {
            id: guidance_id(UserGuidance::PoeticContent),
            label: "Poetic content".to_string(),
            description: "Poetry or lyrical prose; treated conceptually.".to_string(),
            confidence: None,
        },
        ClarificationOption {
            id: guidance_id(UserGuidance::MixedContent),
            label: "Mixed content".to_string(),
            description: "A blend of the above.".to_string(),
            confidence: None,
        },
    ]
}

// ----------------------------------------------------------------------
// Setting and complexity
// ----------------------------------------------------------------------

/// Extract a short setting description (location, time of day, season).
pub fn extract_setting(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut parts = Vec::new();

    if let Some(caps) = LOCATION.captures(text) {
        parts.push(format!("location: {}", caps[1].to_lowercase()));
    }
    if let Some(time) = TIMES_OF_DAY.iter().find(|t| lower.contains(*t)) {
        parts.push(format!("time: {}", time));
    }
    if let Some(season) = SEASONS.iter().find(|s| lower.contains(*s)) {
        parts.push(format!("season: {}", season));
    }

    if parts.is_empty() {
        "unspecified".to_string()
    } else {
        parts.join("; ")
    }
}

/// Blend of sentence length, vocabulary diversity, average word length, and
/// punctuation density, each normalized then averaged.
pub fn text_complexity(text: &str) -> f64 {
    let words = clean_words(text);
    if words.is_empty() {
        return 0.0;
    }

    let text_sentences = sentences(text);
    let avg_sentence_words = if text_sentences.is_empty() {
        words.len() as f64
    } else {
        words.len() as f64 / text_sentences.len() as f64
    };
    let sentence_component = (avg_sentence_words / 30.0).min(1.0);

    let mut unique = words.clone();
    unique.sort_unstable();
    unique.dedup();
    let diversity = unique.len() as f64 / words.len() as f64;

    let avg_word_len = words.iter().map(|w| w.chars().count()).sum::<usize>() as f64
        / words.len() as f64;
    let word_component = (avg_word_len / 8.0).min(1.0);

    let punctuation = text
        .chars()
        .filter(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\''))
        .count() as f64;
    let punct_component = (punctuation / text.chars().count().max(1) as f64 * 10.0).min(1.0);

    clamp_unit((sentence_component + diversity + word_component + punct_component) / 4.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn orchestrator() -> AnalysisOrchestrator {
        AnalysisOrchestrator::new()
    }

    const SCENARIO_A: &str = "Elena stood at the lighthouse, watching the grey water. \
Marcus had been her friend, but his deception changed everything.";

    const SCENARIO_B: &str = "John walked into the room. He was nervous about the meeting. \
Sarah greeted him with a smile.";

    #[test]
    fn test_scenario_a_characters_theme_and_emotion() {
        let analysis = orchestrator().analyze_text(SCENARIO_A);
        let names: Vec<_> = analysis.characters.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Elena"), "missing Elena in {:?}", names);
        assert!(names.contains(&"Marcus"), "missing Marcus in {:?}", names);
        assert!(analysis
            .narrative_themes
            .iter()
            .any(|t| t.theme.to_lowercase().contains("betrayal")
                || t.theme.to_lowercase().contains("deception")));
        assert!(analysis
            .emotional_arc
            .iter()
            .any(|e| e.emotion != "neutral"));
    }

    #[test]
    fn test_scenario_b_john_confident() {
        let analysis = orchestrator().analyze_text(SCENARIO_B);
        let john = analysis
            .characters
            .iter()
            .find(|c| c.name == "John")
            .expect("John not detected");
        assert!(john.confidence_score > 0.3);
    }

    #[test]
    fn test_scenario_c_empty_input() {
        let analysis = orchestrator().analyze_text("");
        assert!(analysis.characters.is_empty());
        assert!(analysis.narrative_themes.is_empty());
        assert!(analysis.emotional_arc.is_empty());
        assert_eq!(analysis.setting_description, "unspecified");
        assert_eq!(analysis.text_complexity, 0.0);
    }

    #[test]
    fn test_scenario_d_conceptual_synthesis() {
        let analysis = orchestrator().analyze_text("What is the meaning of existence?");
        assert_eq!(analysis.processing_strategy, "create");
        assert!(!analysis.characters.is_empty());
        for character in &analysis.characters {
            assert_eq!(character.content_type, "conceptual");
            assert!(!character.conceptual_basis.is_empty());
        }
    }

    #[test]
    fn test_output_caps_and_ranges() {
        let text = format!(
            "{} {} Love and betrayal shaped the family. Fear and hope fought all winter.",
            SCENARIO_A, SCENARIO_B
        );
        let analysis = orchestrator().analyze_text(&text);
        assert!(analysis.characters.len() <= 8);
        assert!(analysis.narrative_themes.len() <= 8);
        assert!(analysis.emotional_arc.len() <= 12);
        for c in &analysis.characters {
            assert!((0.0..=1.0).contains(&c.confidence_score));
            assert!((0.0..=1.0).contains(&c.importance_score));
        }
        for t in &analysis.narrative_themes {
            assert!((0.0..=1.0).contains(&t.strength));
        }
        for pair in analysis.narrative_themes.windows(2) {
            assert!(pair[0].strength >= pair[1].strength);
        }
        assert!((0.0..=1.0).contains(&analysis.text_complexity));
    }

    #[test]
    fn test_character_cap_enforced_with_surplus_candidates() {
        // Nine viable named candidates; only the configured maximum of 8
        // may survive, and the weakest (last-mentioned) one is dropped.
        let text = "Alba walked into the hall. Boris walked to the window. \
                    Clara walked up the stairs. Doran walked past the gate. \
                    Edwin walked along the pier. Farah walked through the yard. \
                    Greta walked beside the wall. Henrik walked toward the door. \
                    Ivona walked across the bridge.";
        let analysis = orchestrator().analyze_text(text);
        assert_eq!(analysis.characters.len(), 8);
        let names: Vec<_> = analysis.characters.iter().map(|c| c.name.as_str()).collect();
        assert!(!names.contains(&"Ivona"), "cap not enforced: {:?}", names);
        assert_eq!(analysis.analysis_metadata.character_count, 8);
    }

    #[test]
    fn test_determinism_modulo_timing() {
        let strip_timing = |analysis: TextAnalysis| -> Value {
            let mut value = serde_json::to_value(&analysis).unwrap();
            value["analysis_metadata"]
                .as_object_mut()
                .unwrap()
                .remove("processing_time_ms");
            value
        };
        let first = strip_timing(orchestrator().analyze_text(SCENARIO_A));
        let second = strip_timing(orchestrator().analyze_text(SCENARIO_A));
        assert_eq!(first, second);
    }

    #[test]
    fn test_short_text_requires_clarification() {
        let outcome = orchestrator().analyze_character_text("Hi", None);
        match outcome {
            CharacterAnalysisOutcome::Clarification(request) => {
                assert!(request.clarification_needed);
                assert!(!request.prompts.is_empty());
            }
            CharacterAnalysisOutcome::Analysis(_) => panic!("expected clarification"),
        }
    }

    #[test]
    fn test_guidance_suppresses_clarification() {
        // Ambiguous text, but explicit guidance forces an analysis.
        let text = "Grey water, grey stone, a figure on the pier remembering.";
        let outcome = orchestrator()
            .analyze_character_text(text, Some(UserGuidance::PoeticContent));
        match outcome {
            CharacterAnalysisOutcome::Analysis(analysis) => {
                assert_eq!(analysis.detected_content_type, "conceptual");
                assert_eq!(analysis.processing_strategy, "create");
            }
            CharacterAnalysisOutcome::Clarification(_) => panic!("guidance should bypass the gate"),
        }
    }

    #[test]
    fn test_ambiguous_text_ranks_options() {
        // Mixed weak signals with no guidance should request clarification.
        let text = "Notes on the harbor. Some say the meaning of tides is habit.";
        let outcome = orchestrator().analyze_character_text(text, None);
        if let CharacterAnalysisOutcome::Clarification(request) = outcome {
            assert!(request.clarification_needed);
            assert!(request.content_analysis.is_some());
            assert!(request.options.len() >= 4);
            assert!(request.text_preview.is_some());
        }
        // An unambiguous classification is also acceptable here; the gate is
        // exercised by test_short_text_requires_clarification regardless.
    }

    #[test]
    fn test_cancellation_propagates() {
        let token = CancelToken::new();
        token.cancel();
        let result = orchestrator().analyze_text_with_cancel(SCENARIO_A, &token);
        assert!(matches!(result, Err(AnalysisError::Cancelled)));
    }

    #[test]
    fn test_clarification_json_shape() {
        let outcome = orchestrator().analyze_character_text("", None);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["clarification_needed"], Value::Bool(true));
        assert!(json["prompts"].as_array().is_some());
    }

    #[test]
    fn test_setting_extraction() {
        let setting = extract_setting("They met at the lighthouse one winter night.");
        assert!(setting.contains("location: lighthouse"));
        assert!(setting.contains("time: night"));
        assert!(setting.contains("season: winter"));
    }

    #[test]
    fn test_metadata_counts_match() {
        let analysis = orchestrator().analyze_text(SCENARIO_B);
        assert_eq!(
            analysis.analysis_metadata.character_count,
            analysis.characters.len()
        );
        assert_eq!(
            analysis.analysis_metadata.theme_count,
            analysis.narrative_themes.len()
        );
        assert_eq!(
            analysis.analysis_metadata.emotional_states_count,
            analysis.emotional_arc.len()
        );
        assert_eq!(analysis.analysis_metadata.text_length, SCENARIO_B.len());
        assert_eq!(analysis.analysis_metadata.analyzer_version, crate::VERSION);
    }
}
