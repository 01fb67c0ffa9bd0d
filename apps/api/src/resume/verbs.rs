//! Action-verb vocabulary shared by the ATS scorer and the bullet analyzer.

/// Lower-case, past-tense verbs that make a strong bullet opener.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "analyzed",
    "architected",
    "automated",
    "built",
    "collaborated",
    "configured",
    "coordinated",
    "created",
    "debugged",
    "delivered",
    "deployed",
    "designed",
    "developed",
    "drove",
    "engineered",
    "established",
    "implemented",
    "improved",
    "increased",
    "initiated",
    "integrated",
    "launched",
    "led",
    "managed",
    "mentored",
    "migrated",
    "optimized",
    "owned",
    "published",
    "redesigned",
    "reduced",
    "refactored",
    "resolved",
    "scaled",
    "shipped",
    "spearheaded",
    "streamlined",
    "tested",
];

/// Lower-cases `word` and drops every non-letter character.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn is_action_verb(word: &str) -> bool {
    let normalized = normalize_word(word);
    !normalized.is_empty() && ACTION_VERBS.contains(&normalized.as_str())
}

/// True when any whitespace-separated word in `text` is an action verb.
pub fn contains_action_verb(text: &str) -> bool {
    text.split_whitespace().any(is_action_verb)
}
