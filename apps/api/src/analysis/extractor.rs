//! Skill extraction: case-insensitive substring scan of a JD against the vocabulary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::vocabulary::{SkillCategory, FALLBACK_SKILLS};

/// Categorized keyword hits for one JD.
///
/// Every category key is always present (possibly empty). Within a category the
/// entries follow vocabulary order and never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<SkillCategory, Vec<String>>",
    into = "BTreeMap<SkillCategory, Vec<String>>"
)]
pub struct ExtractedSkills {
    by_category: BTreeMap<SkillCategory, Vec<String>>,
}

impl ExtractedSkills {
    fn empty() -> Self {
        Self {
            by_category: SkillCategory::ALL
                .iter()
                .map(|c| (*c, Vec::new()))
                .collect(),
        }
    }

    pub fn get(&self, category: SkillCategory) -> &[String] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_populated(&self, category: SkillCategory) -> bool {
        !self.get(category).is_empty()
    }

    /// Number of vocabulary categories with at least one hit. The `other`
    /// fallback never counts.
    pub fn populated_vocabulary_categories(&self) -> usize {
        SkillCategory::ALL
            .iter()
            .filter(|c| **c != SkillCategory::Other && self.is_populated(**c))
            .count()
    }

    /// Every skill across every category, in category order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.by_category.values().flatten().map(String::as_str)
    }

    pub fn contains_skill(&self, skill: &str) -> bool {
        self.all_skills().any(|s| s == skill)
    }

    pub fn total(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    /// True when any entry in `category` contains any of `needles`
    /// (case-insensitive; needles are expected lower-case).
    pub fn any_contains(&self, category: SkillCategory, needles: &[&str]) -> bool {
        self.get(category).iter().any(|skill| {
            let lower = skill.to_lowercase();
            needles.iter().any(|n| lower.contains(n))
        })
    }

    /// Iterates `(category, skills)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.by_category.iter().map(|(c, s)| (*c, s.as_slice()))
    }
}

impl From<BTreeMap<SkillCategory, Vec<String>>> for ExtractedSkills {
    /// Normalizes a stored map: missing categories become empty and repeated
    /// entries are dropped, keeping first occurrence.
    fn from(map: BTreeMap<SkillCategory, Vec<String>>) -> Self {
        let mut skills = Self::empty();
        for (category, entries) in map {
            let slot = skills.by_category.entry(category).or_default();
            for entry in entries {
                if !slot.contains(&entry) {
                    slot.push(entry);
                }
            }
        }
        skills
    }
}

impl From<ExtractedSkills> for BTreeMap<SkillCategory, Vec<String>> {
    fn from(skills: ExtractedSkills) -> Self {
        skills.by_category
    }
}

/// Scans `jd_text` for every vocabulary keyword.
///
/// Presence only: a keyword counts once no matter how often it occurs. When
/// nothing matches, `other` is filled with [`FALLBACK_SKILLS`] so downstream
/// generators never see a fully empty set.
pub fn extract_skills(jd_text: &str) -> ExtractedSkills {
    let haystack = jd_text.to_lowercase();
    let mut skills = ExtractedSkills::empty();

    for category in SkillCategory::ALL {
        let matched: Vec<String> = category
            .keywords()
            .iter()
            .filter(|kw| haystack.contains(&kw.to_lowercase()))
            .map(|kw| kw.to_string())
            .collect();
        skills.by_category.insert(category, matched);
    }

    if skills.total() == 0 {
        skills.by_category.insert(
            SkillCategory::Other,
            FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect(),
        );
    }

    debug!(
        total = skills.total(),
        categories = skills.populated_vocabulary_categories(),
        "Extracted skills from JD"
    );

    skills
}
