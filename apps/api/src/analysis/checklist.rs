//! Round checklist: four fixed topic blocks, with detected stack names
//! interpolated into the tech-interview block.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractedSkills;
use crate::analysis::vocabulary::SkillCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistBlock {
    pub round_title: String,
    pub items: Vec<String>,
}

const PRIMARY_PLACEHOLDER: &str = "primary project language";
const FRAMEWORK_PLACEHOLDER: &str = "your main framework";

/// Categories whose hits are eligible for interpolation, in priority order.
const STACK_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory::Web,
    SkillCategory::Languages,
    SkillCategory::Data,
];

fn block(title: &str, items: &[&str]) -> ChecklistBlock {
    ChecklistBlock {
        round_title: title.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn generate_checklist(skills: &ExtractedSkills) -> Vec<ChecklistBlock> {
    let mut stack = STACK_CATEGORIES
        .iter()
        .flat_map(|c| skills.get(*c))
        .map(String::as_str);
    let primary = stack.next().unwrap_or(PRIMARY_PLACEHOLDER);
    let framework = stack.next().unwrap_or(FRAMEWORK_PLACEHOLDER);

    vec![
        block(
            "Round 1: Aptitude / Basics",
            &[
                "Quantitative Ability (Time/Work, P&C, Probability)",
                "Logical Reasoning (Puzzles, Patterns, Series)",
                "Verbal Ability (Reading Comprehension, Grammar)",
                "Data Interpretation basics",
                "Basic Computer Fundamentals",
                "Debugging / Pseudo-code logic",
            ],
        ),
        block(
            "Round 2: DSA + Core CS",
            &[
                "Arrays, Strings, Linked Lists",
                "Trees, Graphs, BST",
                "Sorting & Searching Algorithms",
                "SQL Queries (Joins, Aggregates, Normalization)",
                "OOP Concepts (Encapsulation, Polymorphism)",
                "OS Concepts (Threading, Memory Management)",
            ],
        ),
        ChecklistBlock {
            round_title: "Round 3: Tech Interview".to_string(),
            items: vec![
                format!("Deep dive into {primary}"),
                "Project Architecture & Challenges".to_string(),
                "API Design & Integration patterns".to_string(),
                "Database Schema & Optimization".to_string(),
                "Version Control (Git) workflows".to_string(),
                format!("Framework specifics ({framework})"),
            ],
        },
        block(
            "Round 4: Managerial / HR",
            &[
                "Why this specific company/role?",
                "Strengths & Weaknesses (with examples)",
                "Project conflict resolution scenarios",
                "Where do you see yourself in 5 years?",
                "Salary expectations & negotiation",
                "Questions for the interviewer",
            ],
        ),
    ]
}
