//! The 14 narrative theme definitions.
//!
//! Each theme carries a keyword list (case-insensitive substring hits) and a
//! small regex family whose matches double as evidence fragments.

use once_cell::sync::Lazy;
use regex::Regex;

/// One theme definition from the fixed catalog.
pub struct ThemeDef {
    /// Stable identifier (snake_case).
    pub id: &'static str,
    /// Human-readable label used in output.
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub patterns: Vec<Regex>,
}

fn def(
    id: &'static str,
    label: &'static str,
    keywords: &'static [&'static str],
    patterns: &[&str],
) -> ThemeDef {
    ThemeDef {
        id,
        label,
        keywords,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
            .collect(),
    }
}

/// The full 14-theme catalog, in canonical order.
pub static THEME_CATALOG: Lazy<Vec<ThemeDef>> = Lazy::new(|| {
    vec![
        def(
            "love_romance",
            "Love & Romance",
            &["love", "romance", "kiss", "heart", "passion", "tender", "embrace", "beloved"],
            &[
                r"\bfell in love\b",
                r"\bloved? (?:him|her|them)\b",
                r"\bheld (?:him|her) close\b",
            ],
        ),
        def(
            "betrayal_deception",
            "Betrayal & Deception",
            &["betrayal", "betrayed", "deception", "deceived", "lied", "lies", "secret", "unfaithful"],
            &[
                r"\bbetray\w*\b",
                r"\bdecei\w+\b",
                r"\b(?:lied|lying) to\b",
                r"\btrust\w* (?:was )?broken\b",
                r"\bbehind (?:his|her|their) back\b",
            ],
        ),
        def(
            "power_control",
            "Power & Control",
            &["power", "control", "command", "authority", "dominate", "rule", "obey", "empire"],
            &[
                r"\bseized? (?:power|control)\b",
                r"\bunder (?:his|her|their) control\b",
                r"\bgave? (?:the )?orders?\b",
            ],
        ),
        def(
            "redemption",
            "Redemption",
            &["redemption", "forgive", "forgiveness", "atone", "second chance", "mercy", "absolution"],
            &[
                r"\bredeem\w*\b",
                r"\bmake (?:it|things|amends) right\b",
                r"\bforgave?\b",
            ],
        ),
        def(
            "sacrifice_loss",
            "Sacrifice & Loss",
            &["sacrifice", "loss", "lost", "gave up", "grief", "mourning", "funeral", "gone forever"],
            &[
                r"\bsacrific\w+\b",
                r"\bgave (?:up|everything|his life|her life)\b",
                r"\blost (?:everything|everyone|him|her)\b",
            ],
        ),
        def(
            "justice_morality",
            "Justice & Morality",
            &["justice", "injustice", "moral", "right", "wrong", "guilt", "innocent", "judge"],
            &[
                r"\bjustice\b",
                r"\b(?:right|wrong)(?:ed)? (?:and|or|from) (?:right|wrong)\b",
                r"\bpay for (?:what|his|her|their)\b",
            ],
        ),
        def(
            "family",
            "Family",
            &["family", "mother", "father", "sister", "brother", "parents", "daughter", "son", "home"],
            &[
                r"\b(?:his|her|their) (?:mother|father|sister|brother|parents)\b",
                r"\bfamily\b",
                r"\bgrew up\b",
            ],
        ),
        def(
            "friendship_loyalty",
            "Friendship & Loyalty",
            &["friend", "friendship", "loyal", "loyalty", "trust", "companion", "stood by", "bond"],
            &[
                r"\b(?:best|old|true) friends?\b",
                r"\bstood by\b",
                r"\bnever abandon\w*\b",
            ],
        ),
        def(
            "survival_danger",
            "Survival & Danger",
            &["survive", "survival", "danger", "threat", "escape", "hunted", "peril", "desperate"],
            &[
                r"\bfought? (?:for|to) (?:survival|survive|live)\b",
                r"\bbarely (?:escaped|survived|alive)\b",
                r"\blife (?:and|or) death\b",
            ],
        ),
        def(
            "growth",
            "Growth & Transformation",
            &["growth", "change", "changed", "transform", "learn", "became", "no longer", "evolve"],
            &[
                r"\bno longer (?:the|a|afraid|who)\b",
                r"\bbecame? (?:someone|a different|stronger)\b",
                r"\blearned? (?:to|that|how)\b",
            ],
        ),
        def(
            "conflict",
            "Conflict",
            &["conflict", "fight", "battle", "war", "argument", "struggle", "clash", "enemy"],
            &[
                r"\bfought\b",
                r"\bat war\b",
                r"\bargued? (?:with|about|over)\b",
            ],
        ),
        def(
            "mystery",
            "Mystery",
            &["mystery", "mysterious", "secret", "hidden", "unknown", "clue", "vanished", "strange"],
            &[
                r"\bno one knew\b",
                r"\bdisappear\w+ without\b",
                r"\bsomething (?:strange|odd|hidden)\b",
            ],
        ),
        def(
            "adventure",
            "Adventure",
            &["adventure", "journey", "quest", "travel", "explore", "discover", "voyage", "expedition"],
            &[
                r"\bset (?:out|off|sail)\b",
                r"\bjourney\w*\b",
                r"\bacross the (?:sea|mountains|desert|world)\b",
            ],
        ),
        def(
            "identity",
            "Identity",
            &["identity", "who am i", "who she was", "who he was", "true self", "belong", "mask", "stranger"],
            &[
                r"\bwho (?:am i|he (?:really )?was|she (?:really )?was)\b",
                r"\btrue self\b",
                r"\bdidn't (?:belong|recognize)\b",
            ],
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_fourteen_themes() {
        assert_eq!(THEME_CATALOG.len(), 14);
    }

    #[test]
    fn test_theme_ids_unique() {
        let mut ids: Vec<_> = THEME_CATALOG.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_betrayal_patterns_catch_deception() {
        let theme = THEME_CATALOG
            .iter()
            .find(|t| t.id == "betrayal_deception")
            .unwrap();
        let text = "his deception changed everything";
        assert!(theme.patterns.iter().any(|p| p.is_match(text)));
        assert!(theme.keywords.iter().any(|k| text.contains(k)));
    }
}
