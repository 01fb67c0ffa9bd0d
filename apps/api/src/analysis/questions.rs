//! Interview question generation: category banks, stack triggers, then fillers,
//! deduplicated and capped.

use std::collections::HashSet;

use crate::analysis::extractor::ExtractedSkills;
use crate::analysis::vocabulary::SkillCategory;

pub const MAX_QUESTIONS: usize = 10;
/// Bank questions taken per populated category.
pub const PER_CATEGORY_LIMIT: usize = 2;

fn bank(category: SkillCategory) -> &'static [&'static str] {
    match category {
        SkillCategory::CoreCs => &[
            "Explain the four pillars of OOP with real-world examples.",
            "What is the difference between a Process and a Thread?",
            "Explain ACID properties in databases.",
            "What is a deadlock and how do you prevent it?",
            "Difference between TCP and UDP?",
            "How does DNS resolution work?",
        ],
        SkillCategory::Languages => &[
            "Explain memory management in your primary language.",
            "Explain pass by value vs pass by reference.",
            "How does Garbage Collection work?",
        ],
        SkillCategory::Web => &[
            "Explain the difference between Local Storage, Session Storage, and Cookies.",
            "What is CORS and how do you handle it?",
            "Explain RESTful API constraints.",
            "What is the Critical Rendering Path?",
        ],
        SkillCategory::Data => &[
            "Explain Indexing. When does it help/hurt?",
            "Write a SQL query to find the 2nd highest salary.",
            "Difference between SQL and NoSQL databases.",
            "What is Normalization? Explain 1NF, 2NF, 3NF.",
        ],
        SkillCategory::Cloud => &[
            "What is Docker and how is it different from a VM?",
            "Explain CI/CD pipeline stages.",
            "What is Kubernetes used for?",
            "Explain vertical vs horizontal scaling.",
        ],
        SkillCategory::Testing => &[
            "What is the difference between unit, integration, and end-to-end tests?",
            "How do you decide what to mock in a test?",
            "How do you deal with flaky tests?",
        ],
        SkillCategory::Other => &[
            "How do you explain a technical idea to a non-technical stakeholder?",
            "Walk me through how you break down an unfamiliar problem.",
        ],
    }
}

const REACT_QUESTIONS: &[&str] = &[
    "Explain the Virtual DOM and diffing algorithm.",
    "What are React Hooks? Compare useEffect vs useLayoutEffect.",
    "How do you manage state in a complex React app?",
];

const NODE_QUESTIONS: &[&str] = &[
    "Explain the Event Loop in Node.js.",
    "Difference between process.nextTick() and setImmediate().",
];

const JAVA_QUESTIONS: &[&str] = &[
    "Explain the difference between JDK, JRE, and JVM.",
    "What is the contract between hashCode() and equals()?",
];

const PYTHON_QUESTIONS: &[&str] = &[
    "Explain Python's GIL (Global Interpreter Lock).",
    "Difference between list and tuple in Python.",
];

const BEHAVIORAL_FILLERS: &[&str] = &[
    "Tell me about yourself and your background.",
    "Describe a challenging bug you fixed recently.",
    "How do you ensure code quality in your projects?",
    "Tell me about a time you disagreed with a teammate and how it was resolved.",
    "What is your preferred development environment setup?",
];

const SYSTEM_DESIGN_FILLERS: &[&str] = &[
    "Design a URL shortening service (System Design basic).",
    "How would you design a rate limiter for a public API?",
    "Where would you add caching in a read-heavy web application?",
    "How would you design a notification service that fans out to millions of users?",
    "How do you choose between SQL and NoSQL storage for a new feature?",
];

/// Returns at most [`MAX_QUESTIONS`] unique questions.
///
/// Order before truncation: bank questions per populated category (category
/// order), then stack triggers, then fillers. The filler pool alone reaches the
/// cap, so the result always holds exactly [`MAX_QUESTIONS`] entries.
pub fn generate_questions(skills: &ExtractedSkills) -> Vec<String> {
    let mut candidates: Vec<&str> = Vec::new();

    for (category, hits) in skills.iter() {
        if !hits.is_empty() {
            candidates.extend(bank(category).iter().take(PER_CATEGORY_LIMIT));
        }
    }

    if skills.any_contains(SkillCategory::Web, &["react"]) {
        candidates.extend(REACT_QUESTIONS);
    }
    if skills.any_contains(SkillCategory::Web, &["node"]) {
        candidates.extend(NODE_QUESTIONS);
    }
    if skills.any_contains(SkillCategory::Languages, &["java"]) {
        candidates.extend(JAVA_QUESTIONS);
    }
    if skills.any_contains(SkillCategory::Languages, &["python"]) {
        candidates.extend(PYTHON_QUESTIONS);
    }

    candidates.extend(BEHAVIORAL_FILLERS);
    candidates.extend(SYSTEM_DESIGN_FILLERS);

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|q| seen.insert(*q))
        .take(MAX_QUESTIONS)
        .map(str::to_string)
        .collect()
}
