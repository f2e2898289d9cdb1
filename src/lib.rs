//! storylens — layered character, theme, and emotion analysis for prose.
//!
//! The crate turns free-form text into a structured model: multi-layer
//! character profiles (extracted from narrative or synthesized from
//! concepts), ranked narrative themes, and an emotional trajectory, plus
//! setting and complexity metadata. The entry point is
//! [`AnalysisOrchestrator`]; [`AnalysisOrchestrator::analyze_character_text`]
//! adds a clarification flow for input too short or too ambiguous to
//! analyze confidently.
//!
//! ```no_run
//! use storylens::AnalysisOrchestrator;
//!
//! let orchestrator = AnalysisOrchestrator::new();
//! let analysis = orchestrator.analyze_text("Elena stood at the lighthouse.");
//! println!("{}", serde_json::to_string_pretty(&analysis).unwrap());
//! ```

pub mod characters;
pub mod classifier;
pub mod emotions;
pub mod orchestrator;
pub mod patterns;
pub mod themes;
pub mod utilities;

pub use characters::CharacterProfile;
pub use classifier::{classify, ContentType, ContentTypeResult, ProcessingStrategy};
pub use emotions::EmotionalState;
pub use orchestrator::{
    AnalysisMetadata, AnalysisOrchestrator, CharacterAnalysisOutcome, ClarificationOption,
    ClarificationRequest, TextAnalysis, UserGuidance,
};
pub use themes::NarrativeTheme;
pub use utilities::cancel::CancelToken;
pub use utilities::config::AnalyzerConfig;
pub use utilities::errors::AnalysisError;
pub use utilities::sink::{LogSink, MemorySink, NoopSink, ProgressSink};

/// Crate version reported in analysis metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
