//! 7-day preparation plan built from a fixed template with skill-driven substitutions.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractedSkills;
use crate::analysis::vocabulary::SkillCategory;

/// One block of the plan. A block may span more than one day ("Day 1-2").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,
    pub focus: String,
    pub tasks: Vec<String>,
}

impl PlanDay {
    /// Number of calendar days the block's label covers.
    pub fn span(&self) -> usize {
        let range = self.day.trim_start_matches("Day ").trim();
        match range.split_once('-') {
            Some((start, end)) => match (start.trim().parse::<usize>(), end.trim().parse::<usize>()) {
                (Ok(s), Ok(e)) if e >= s => e - s + 1,
                _ => 1,
            },
            None => 1,
        }
    }
}

pub const PLAN_DAYS: usize = 7;

const DSA_HINTS: &[&str] = &["dsa", "algorithms", "data structures"];
const REACT_HINTS: &[&str] = &["react"];
const BACKEND_HINTS: &[&str] = &["node", "express", "django", "spring"];

fn day(label: &str, focus: &str, tasks: Vec<&str>) -> PlanDay {
    PlanDay {
        day: label.to_string(),
        focus: focus.to_string(),
        tasks: tasks.into_iter().map(str::to_string).collect(),
    }
}

/// Generates the plan. Deterministic given `skills`.
pub fn generate_plan(skills: &ExtractedSkills) -> Vec<PlanDay> {
    let has_dsa = skills.any_contains(SkillCategory::CoreCs, DSA_HINTS);
    let has_react = skills.any_contains(SkillCategory::Web, REACT_HINTS);
    let has_backend = skills.any_contains(SkillCategory::Web, BACKEND_HINTS);
    let has_cloud = skills.is_populated(SkillCategory::Cloud);

    vec![
        day(
            "Day 1-2",
            "Basics & Core CS",
            vec![
                "Revise OOP concepts (Polymorphism, Inheritance)",
                "Brush up on DBMS normalization & indexing",
                "OS Basics (Process vs Thread, Deadlocks)",
                "Network Protocols (HTTP, TCP/IP)",
            ],
        ),
        day(
            "Day 3-4",
            "DSA & Coding",
            vec![
                if has_dsa {
                    "Focus on Graphs/DP/Trees"
                } else {
                    "Practice Arrays, Strings, and Maps"
                },
                "Solve 5 medium LeetCode problems",
                "Time & Space Complexity analysis",
                "Implement standard algorithms (Merge Sort, Binary Search)",
            ],
        ),
        day(
            "Day 5",
            "Project & Stack",
            vec![
                if has_react {
                    "Review React Lifecycle & Hooks"
                } else {
                    "Review project architecture"
                },
                if has_backend {
                    "API Design & REST principles"
                } else {
                    "Database schema optimization"
                },
                "Align resume projects with JD",
                if has_cloud {
                    "Review Docker/CI-CD pipelines"
                } else {
                    "Check deployment basics"
                },
            ],
        ),
        day(
            "Day 6",
            "Mock Interviews",
            vec![
                "Behavioral questions (STAR method)",
                "System Design basic blocks (LB, Caching, DB)",
                "Peer mock interview",
            ],
        ),
        day(
            "Day 7",
            "Revision",
            vec![
                "Review weak areas from mocks",
                "Quick formula revision (Aptitude)",
                "Final resume polish",
            ],
        ),
    ]
}
