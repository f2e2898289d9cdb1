//! Error types for the analysis engine.
//!
//! Per-candidate profile failures are ordinary values (`ProfileRejection`)
//! filtered by the orchestrator; only cancellation and configuration loading
//! surface as hard errors.

use thiserror::Error;

/// Errors that abort an analysis call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller's cancellation token fired mid-analysis.
    #[error("analysis cancelled")]
    Cancelled,
}

/// Reasons a character candidate was rejected during profile construction.
///
/// These are not failures of the batch: the orchestrator logs them through
/// the progress sink and continues with the remaining candidates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileRejection {
    /// Candidate name was empty after trimming.
    #[error("empty candidate name")]
    EmptyName,

    /// Name failed the shape check (length 2-25, letters/apostrophe/hyphen only).
    #[error("malformed candidate name: {name}")]
    MalformedName { name: String },

    /// The text never mentions the candidate, so no segments exist to build from.
    #[error("no mentions of '{name}' in text")]
    NoMentions { name: String },

    /// Profile confidence fell at or below the acceptance floor.
    #[error("profile confidence {confidence:.2} too low for '{name}'")]
    InsufficientConfidence { name: String, confidence: f64 },
}

/// Errors loading an analyzer configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// File contents were not valid YAML for `AnalyzerConfig`.
    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}
