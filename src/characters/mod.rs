//! Character detection pipeline: candidate extraction, scoring, three-layer
//! profile construction, and conceptual synthesis.

pub mod builder;
pub mod extractor;
pub mod profile;
pub mod scorer;
pub mod synthesizer;

pub use builder::ProfileBuilder;
pub use extractor::extract_candidates;
pub use profile::CharacterProfile;
pub use scorer::{score_candidates, ScoredCandidate};
pub use synthesizer::synthesize_characters;
