//! The three-layer character profile record.
//!
//! Skin (observable), flesh (background/relational), core (psychological),
//! plus detection metadata. Profiles are immutable after construction; the
//! serde representation is the output contract consumed downstream, so field
//! names are load-bearing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

fn default_content_type() -> String {
    "narrative".to_string()
}

/// A structured, multi-layer character model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    /// Alternate names detected in the text (sorted set for determinism).
    #[serde(default)]
    pub aliases: BTreeSet<String>,

    // Skin layer — observable
    #[serde(default)]
    pub physical_description: String,
    #[serde(default)]
    pub mannerisms: Vec<String>,
    #[serde(default)]
    pub speech_patterns: Vec<String>,
    #[serde(default)]
    pub behavioral_traits: Vec<String>,

    // Flesh layer — background and relationships
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub relationships: Vec<String>,
    #[serde(default)]
    pub formative_experiences: Vec<String>,
    #[serde(default)]
    pub social_connections: Vec<String>,

    // Core layer — psychological
    #[serde(default)]
    pub motivations: Vec<String>,
    #[serde(default)]
    pub fears: Vec<String>,
    #[serde(default)]
    pub desires: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub personality_drivers: Vec<String>,

    // Detection metadata
    /// Certainty that this name is a genuine character, in [0, 1].
    pub confidence_score: f64,
    /// Estimated narrative prominence, in [0, 1].
    pub importance_score: f64,
    /// Supporting text fragments (at most 5).
    #[serde(default)]
    pub text_references: Vec<String>,
    /// Fragment around the first mention.
    #[serde(default)]
    pub first_appearance: String,
    /// `"narrative"` for extracted profiles, `"conceptual"` for synthesized ones.
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Concepts a synthesized character was built from (empty when extracted).
    #[serde(default)]
    pub conceptual_basis: Vec<String>,
}

impl CharacterProfile {
    /// An empty profile shell for `name`; the builder fills the layers in.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: BTreeSet::new(),
            physical_description: String::new(),
            mannerisms: Vec::new(),
            speech_patterns: Vec::new(),
            behavioral_traits: Vec::new(),
            backstory: String::new(),
            relationships: Vec::new(),
            formative_experiences: Vec::new(),
            social_connections: Vec::new(),
            motivations: Vec::new(),
            fears: Vec::new(),
            desires: Vec::new(),
            conflicts: Vec::new(),
            personality_drivers: Vec::new(),
            confidence_score: 0.0,
            importance_score: 0.0,
            text_references: Vec::new(),
            first_appearance: String::new(),
            content_type: default_content_type(),
            conceptual_basis: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip_preserves_name() {
        let mut profile = CharacterProfile::new("Elena");
        profile.confidence_score = 0.7;
        profile.motivations.push("to keep the light burning".to_string());
        profile.aliases.insert("Lena".to_string());

        let json = serde_json::to_string(&profile).unwrap();
        let restored: CharacterProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.name, profile.name);
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_minimal_json_fills_defaults() {
        let json = r#"{"name":"Marcus","confidence_score":0.5,"importance_score":0.2}"#;
        let profile: CharacterProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Marcus");
        assert_eq!(profile.content_type, "narrative");
        assert!(profile.conceptual_basis.is_empty());
        assert!(profile.mannerisms.is_empty());
    }
}
