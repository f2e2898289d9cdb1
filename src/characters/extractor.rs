//! Character-candidate extraction — six weighted pattern families.
//!
//! Produces a name -> accumulated-score tally. Scoring and filtering happen
//! in the scorer; this pass only gathers raw evidence.

use std::collections::BTreeMap;

use crate::patterns::names::{
    is_stop_name, ACTION_ATTRIBUTION, CAP_TOKEN, DIALOGUE_ATTRIBUTION, DIRECT_ADDRESS_CLOSE,
    DIRECT_ADDRESS_OPEN, FULL_NAME, POSSESSIVE, WEIGHT_ACTION, WEIGHT_CAP_TOKEN, WEIGHT_DIALOGUE,
    WEIGHT_DIRECT_ADDRESS, WEIGHT_FULL_NAME, WEIGHT_POSSESSIVE,
};

/// Raw candidate tally. `BTreeMap` keeps downstream iteration deterministic.
pub fn extract_candidates(text: &str) -> BTreeMap<String, f64> {
    let mut tally: BTreeMap<String, f64> = BTreeMap::new();

    let mut add = |name: &str, weight: f64| {
        let name = name.trim();
        if name.is_empty() || is_stop_name(name) {
            return;
        }
        *tally.entry(name.to_string()).or_insert(0.0) += weight;
    };

    // Full names: `First Last`, optionally with a middle name.
    for caps in FULL_NAME.captures_iter(text) {
        add(&caps[1], WEIGHT_FULL_NAME);
    }

    // Repeated single capitalized tokens: +1 per occurrence once seen twice.
    let mut token_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for caps in CAP_TOKEN.captures_iter(text) {
        *token_counts
            .entry(caps.get(1).unwrap().as_str())
            .or_insert(0) += 1;
    }
    for (token, count) in token_counts {
        if count >= 2 {
            add(token, WEIGHT_CAP_TOKEN * count as f64);
        }
    }

    // Dialogue attribution: `Name said/asked/...`.
    for caps in DIALOGUE_ATTRIBUTION.captures_iter(text) {
        add(&caps[1], WEIGHT_DIALOGUE);
    }

    // Possessive: `Name's`.
    for caps in POSSESSIVE.captures_iter(text) {
        add(&caps[1], WEIGHT_POSSESSIVE);
    }

    // Direct address inside quotes, both vocative positions.
    for caps in DIRECT_ADDRESS_OPEN.captures_iter(text) {
        add(&caps[1], WEIGHT_DIRECT_ADDRESS);
    }
    for caps in DIRECT_ADDRESS_CLOSE.captures_iter(text) {
        add(&caps[1], WEIGHT_DIRECT_ADDRESS);
    }

    // Action attribution: `Name walked/ran/...` (including auxiliaries).
    for caps in ACTION_ATTRIBUTION.captures_iter(text) {
        add(&caps[1], WEIGHT_ACTION);
    }

    tally
}
