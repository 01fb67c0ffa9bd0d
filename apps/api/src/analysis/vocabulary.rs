//! Skill vocabulary: the fixed category → keyword table every JD is scanned against.
//!
//! Categories use lower-camel machine keys on the wire (`coreCS`, `cloud`, ...).
//! Human-readable labels live in [`SkillCategory::label`] and are never used as map keys.

use serde::{Deserialize, Serialize};

/// Topical bucket for a matched keyword.
///
/// Declaration order is the iteration order used by every generator, so it is
/// part of the observable output (question ordering, checklist interpolation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "coreCS", alias = "Core CS")]
    CoreCs,
    #[serde(rename = "languages", alias = "Languages")]
    Languages,
    #[serde(rename = "web", alias = "Web")]
    Web,
    #[serde(rename = "data", alias = "Data")]
    Data,
    #[serde(rename = "cloud", alias = "Cloud/DevOps")]
    Cloud,
    #[serde(rename = "testing", alias = "Testing")]
    Testing,
    #[serde(rename = "other", alias = "General", alias = "Other")]
    Other,
}

impl SkillCategory {
    /// Every category, in iteration order. `Other` is last and holds no vocabulary.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::CoreCs,
        SkillCategory::Languages,
        SkillCategory::Web,
        SkillCategory::Data,
        SkillCategory::Cloud,
        SkillCategory::Testing,
        SkillCategory::Other,
    ];

    /// Display label for UIs and exports.
    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::CoreCs => "Core CS",
            SkillCategory::Languages => "Languages",
            SkillCategory::Web => "Web",
            SkillCategory::Data => "Data",
            SkillCategory::Cloud => "Cloud/DevOps",
            SkillCategory::Testing => "Testing",
            SkillCategory::Other => "Other",
        }
    }

    /// Canonical keywords for this category, in match order.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            SkillCategory::CoreCs => CORE_CS,
            SkillCategory::Languages => LANGUAGES,
            SkillCategory::Web => WEB,
            SkillCategory::Data => DATA,
            SkillCategory::Cloud => CLOUD,
            SkillCategory::Testing => TESTING,
            SkillCategory::Other => &[],
        }
    }
}

const CORE_CS: &[&str] = &[
    "DSA",
    "OOP",
    "DBMS",
    "OS",
    "Networks",
    "Data Structures",
    "Algorithms",
    "Object Oriented",
    "Operating Systems",
    "Computer Networks",
];

const LANGUAGES: &[&str] = &[
    "Java",
    "Python",
    "JavaScript",
    "TypeScript",
    "C",
    "C++",
    "C#",
    "Go",
    "Golang",
    "Rust",
];

const WEB: &[&str] = &[
    "React",
    "Next.js",
    "Node.js",
    "Express",
    "REST",
    "GraphQL",
    "HTML",
    "CSS",
    "Tailwind",
    "Django",
    "Spring",
];

const DATA: &[&str] = &[
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "NoSQL",
    "Database",
];

const CLOUD: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Linux",
    "DevOps",
    "Cloud",
];

const TESTING: &[&str] = &[
    "Selenium",
    "Cypress",
    "Playwright",
    "JUnit",
    "PyTest",
    "Jest",
    "Testing",
];

/// Placeholders used when a JD matches nothing at all.
pub const FALLBACK_SKILLS: &[&str] = &["Communication", "Aptitude", "Problem Solving"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_has_no_vocabulary() {
        assert!(SkillCategory::Other.keywords().is_empty());
    }

    #[test]
    fn test_every_real_category_has_keywords() {
        for category in SkillCategory::ALL.iter().filter(|c| **c != SkillCategory::Other) {
            assert!(!category.keywords().is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_no_duplicate_keywords_within_category() {
        for category in SkillCategory::ALL {
            let keywords = category.keywords();
            for (i, kw) in keywords.iter().enumerate() {
                assert!(
                    !keywords[i + 1..].contains(kw),
                    "duplicate '{kw}' in {:?}",
                    category
                );
            }
        }
    }

    #[test]
    fn test_category_serializes_to_machine_key() {
        assert_eq!(
            serde_json::to_string(&SkillCategory::CoreCs).unwrap(),
            r#""coreCS""#
        );
        assert_eq!(
            serde_json::to_string(&SkillCategory::Cloud).unwrap(),
            r#""cloud""#
        );
    }

    #[test]
    fn test_legacy_labels_deserialize_to_canonical_keys() {
        let core: SkillCategory = serde_json::from_str(r#""Core CS""#).unwrap();
        assert_eq!(core, SkillCategory::CoreCs);
        let cloud: SkillCategory = serde_json::from_str(r#""Cloud/DevOps""#).unwrap();
        assert_eq!(cloud, SkillCategory::Cloud);
        let general: SkillCategory = serde_json::from_str(r#""General""#).unwrap();
        assert_eq!(general, SkillCategory::Other);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(serde_json::from_str::<SkillCategory>(r#""frontend""#).is_err());
    }

    #[test]
    fn test_all_is_in_ord_order() {
        let mut sorted = SkillCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, SkillCategory::ALL);
    }
}
