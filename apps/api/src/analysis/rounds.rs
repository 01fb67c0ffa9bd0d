//! Round mapping: selects one of three fixed interview-round templates by company size.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::company::CompanySize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStage {
    Screening,
    Technical,
    Behavioral,
}

/// One interview stage. Position in the mapping is the interview order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRound {
    pub round_title: String,
    pub stage: RoundStage,
    pub focus_areas: Vec<String>,
    pub why_it_matters: String,
}

struct RoundTemplate {
    title: &'static str,
    stage: RoundStage,
    focus_areas: &'static [&'static str],
    why: &'static str,
}

const ENTERPRISE_ROUNDS: &[RoundTemplate] = &[
    RoundTemplate {
        title: "Round 1: Online Coding Test",
        stage: RoundStage::Screening,
        focus_areas: &["2-3 Medium/Hard DSA Problems", "Time-boxed problem solving"],
        why: "High-volume filtering. Speed and correctness are key.",
    },
    RoundTemplate {
        title: "Round 2: Technical Algo",
        stage: RoundStage::Technical,
        focus_areas: &["DSA Optimization", "Edge Cases", "Complexity analysis"],
        why: "Verifying problem solving depth.",
    },
    RoundTemplate {
        title: "Round 3: System Design / CS Core",
        stage: RoundStage::Technical,
        focus_areas: &["LLD/HLD", "OS/DBMS fundamentals"],
        why: "Checking foundational engineering knowledge.",
    },
    RoundTemplate {
        title: "Round 4: Managerial / HR",
        stage: RoundStage::Behavioral,
        focus_areas: &["Leadership Principles", "Values"],
        why: "Assessing long-term fit and soft skills.",
    },
];

const STARTUP_ROUNDS: &[RoundTemplate] = &[
    RoundTemplate {
        title: "Round 1: Assignment / Screening",
        stage: RoundStage::Screening,
        focus_areas: &["Take-home task", "Basic screening call"],
        why: "Proving you can build something real.",
    },
    RoundTemplate {
        title: "Round 2: Pairing / Technical",
        stage: RoundStage::Technical,
        focus_areas: &["Live coding feature implementation", "Debugging"],
        why: "Checking coding style, debugging, and collaboration.",
    },
    RoundTemplate {
        title: "Round 3: Founder / Culture Fit",
        stage: RoundStage::Behavioral,
        focus_areas: &["Passion", "Ownership"],
        why: "Startups need self-starters who care about the mission.",
    },
];

const DEFAULT_ROUNDS: &[RoundTemplate] = &[
    RoundTemplate {
        title: "Round 1: Online Assessment",
        stage: RoundStage::Screening,
        focus_areas: &["Aptitude", "Basic Coding"],
        why: "To filter candidates based on basic problem solving speed.",
    },
    RoundTemplate {
        title: "Round 2: Technical Interview 1",
        stage: RoundStage::Technical,
        focus_areas: &["Data Structures", "Logic"],
        why: "To test your ability to write efficient code.",
    },
    RoundTemplate {
        title: "Round 3: Technical Interview 2",
        stage: RoundStage::Technical,
        focus_areas: &["System Design", "Specialized Stack"],
        why: "To assess architectural understanding and depth.",
    },
    RoundTemplate {
        title: "Round 4: HR / Managerial",
        stage: RoundStage::Behavioral,
        focus_areas: &["Culture Fit"],
        why: "To see if you align with company values.",
    },
];

/// Returns the round template for `size`. Mid-size companies use the default flow.
pub fn map_rounds(size: CompanySize) -> Vec<InterviewRound> {
    let template = match size {
        CompanySize::Enterprise => ENTERPRISE_ROUNDS,
        CompanySize::Startup => STARTUP_ROUNDS,
        CompanySize::MidSize => DEFAULT_ROUNDS,
    };
    debug!(?size, rounds = template.len(), "Selected round template");

    template
        .iter()
        .map(|t| InterviewRound {
            round_title: t.title.to_string(),
            stage: t.stage,
            focus_areas: t.focus_areas.iter().map(|s| s.to_string()).collect(),
            why_it_matters: t.why.to_string(),
        })
        .collect()
}
