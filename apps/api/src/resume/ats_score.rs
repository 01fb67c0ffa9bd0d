//! ATS readiness score: an additive point table over presence/threshold checks.
//!
//! The table only rewards presence (no negative points), so filling in a
//! missing field can never lower the score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::resume::ResumeRecord;
use crate::resume::verbs::contains_action_verb;

pub const NAME_POINTS: u32 = 10;
pub const EMAIL_POINTS: u32 = 10;
pub const PHONE_POINTS: u32 = 5;
pub const LINKEDIN_POINTS: u32 = 5;
pub const GITHUB_POINTS: u32 = 5;
pub const SUMMARY_LENGTH_POINTS: u32 = 15;
pub const SUMMARY_VERB_POINTS: u32 = 10;
pub const EXPERIENCE_POINTS: u32 = 10;
pub const PROJECTS_POINTS: u32 = 10;
pub const EDUCATION_POINTS: u32 = 10;
pub const SKILLS_POINTS: u32 = 10;

/// Summary must be strictly longer than this (trimmed, in characters).
pub const SUMMARY_MIN_CHARS: usize = 50;
/// Total skills across technical/soft/tools needed for the skills points.
pub const MIN_SKILLS: usize = 8;

pub const MAX_SCORE: u32 = 100;
pub const MAX_IMPROVEMENTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NeedsWork,
    GettingThere,
    Strong,
}

impl ScoreBand {
    fn for_score(score: u32) -> Self {
        match score {
            s if s >= 71 => ScoreBand::Strong,
            s if s >= 41 => ScoreBand::GettingThere,
            _ => ScoreBand::NeedsWork,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub band: ScoreBand,
    /// Up to three suggestions, highest priority first.
    pub improvements: Vec<String>,
}

struct Check {
    points: u32,
    suggestion: &'static str,
    passes: fn(&ResumeRecord) -> bool,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Evaluation order is priority order for improvements.
const CHECKS: &[Check] = &[
    Check {
        points: NAME_POINTS,
        suggestion: "Add your full name",
        passes: |r| filled(&r.personal.name),
    },
    Check {
        points: EMAIL_POINTS,
        suggestion: "Add a professional email address",
        passes: |r| filled(&r.personal.email),
    },
    Check {
        points: PHONE_POINTS,
        suggestion: "Add a phone number",
        passes: |r| filled(&r.personal.phone),
    },
    Check {
        points: LINKEDIN_POINTS,
        suggestion: "Add your LinkedIn profile",
        passes: |r| filled(&r.links.linkedin),
    },
    Check {
        points: GITHUB_POINTS,
        suggestion: "Add your GitHub profile",
        passes: |r| filled(&r.links.github),
    },
    Check {
        points: SUMMARY_LENGTH_POINTS,
        suggestion: "Write a summary longer than 50 characters",
        passes: |r| r.summary.trim().chars().count() > SUMMARY_MIN_CHARS,
    },
    Check {
        points: SUMMARY_VERB_POINTS,
        suggestion: "Use an action verb (e.g. Built, Led, Optimized) in your summary",
        passes: |r| contains_action_verb(&r.summary),
    },
    Check {
        points: EXPERIENCE_POINTS,
        suggestion: "Add at least one experience entry",
        passes: |r| !r.experience.is_empty(),
    },
    Check {
        points: PROJECTS_POINTS,
        suggestion: "Add at least one project",
        passes: |r| !r.projects.is_empty(),
    },
    Check {
        points: EDUCATION_POINTS,
        suggestion: "Add your education",
        passes: |r| !r.education.is_empty(),
    },
    Check {
        points: SKILLS_POINTS,
        suggestion: "List at least 8 skills across technical, soft, and tools",
        passes: |r| r.skills.total() >= MIN_SKILLS,
    },
];

/// Scores `record`. Pure and recomputed from scratch on every call.
pub fn score_resume(record: &ResumeRecord) -> ScoreResult {
    let mut score = 0;
    let mut improvements = Vec::new();

    for check in CHECKS {
        if (check.passes)(record) {
            score += check.points;
        } else {
            improvements.push(format!("{} (+{} points)", check.suggestion, check.points));
        }
    }

    let score = score.min(MAX_SCORE);
    debug!(score, missing = improvements.len(), "Scored resume");
    improvements.truncate(MAX_IMPROVEMENTS);

    ScoreResult {
        score,
        band: ScoreBand::for_score(score),
        improvements,
    }
}

/// Number of checks `record` satisfies.
pub fn satisfied_checks(record: &ResumeRecord) -> usize {
    CHECKS.iter().filter(|c| (c.passes)(record)).count()
}
