//! Analyzer configuration — caps and thresholds.
//!
//! Every knob has a serde default reproducing the engine's reference
//! behavior, so an empty YAML document (or `AnalyzerConfig::default()`)
//! yields the canonical analyzer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Caps and thresholds for a single analyzer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum characters returned per analysis.
    pub max_characters: usize,
    /// Maximum narrative themes returned.
    pub max_themes: usize,
    /// Maximum emotional states returned.
    pub max_emotional_states: usize,
    /// Candidates below this confidence are discarded before profile building.
    pub candidate_confidence_floor: f64,
    /// Built profiles at or below this confidence are rejected.
    pub profile_confidence_floor: f64,
    /// Target number of contiguous segments for emotional-arc analysis.
    pub segment_count: usize,
    /// Minimum segment size in characters.
    pub min_segment_chars: usize,
    /// Content-type confidence below this triggers a clarification request.
    pub clarification_confidence_floor: f64,
    /// Content-type ambiguity above this triggers a clarification request.
    pub ambiguity_ceiling: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_characters: 8,
            max_themes: 8,
            max_emotional_states: 12,
            candidate_confidence_floor: 0.3,
            profile_confidence_floor: 0.2,
            segment_count: 5,
            min_segment_chars: 200,
            clarification_confidence_floor: 0.6,
            ambiguity_ceiling: 0.4,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a configuration from a YAML string. Missing keys take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_caps() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.max_characters, 8);
        assert_eq!(config.max_themes, 8);
        assert_eq!(config.max_emotional_states, 12);
        assert!((config.candidate_confidence_floor - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AnalyzerConfig::from_yaml("max_themes: 4\nambiguity_ceiling: 0.5\n").unwrap();
        assert_eq!(config.max_themes, 4);
        assert!((config.ambiguity_ceiling - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.max_characters, 8);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "segment_count: 3").unwrap();
        let config = AnalyzerConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.segment_count, 3);
        assert_eq!(config.min_segment_chars, 200);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AnalyzerConfig::from_yaml("max_themes: [not a number").is_err());
    }
}
