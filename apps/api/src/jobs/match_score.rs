//! Job match score: an additive point table comparing one listing against the
//! candidate's preferences. Pure and capped at 100.

use serde::{Deserialize, Serialize};

use crate::models::job::{JobListing, JobPreferences};

pub const TITLE_KEYWORD_POINTS: u32 = 25;
pub const LOCATION_POINTS: u32 = 15;
pub const MODE_POINTS: u32 = 10;
pub const EXPERIENCE_POINTS: u32 = 10;
pub const SKILL_OVERLAP_POINTS: u32 = 15;
pub const RECENCY_POINTS: u32 = 5;
/// Listings posted at most this many days ago earn [`RECENCY_POINTS`].
pub const RECENT_DAYS: u32 = 2;
pub const SOURCE_BOOST_POINTS: u32 = 5;
pub const BOOSTED_SOURCE: &str = "LinkedIn";
pub const MAX_MATCH_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub score: u32,
    /// `score >= preferences.min_match_score`
    pub meets_threshold: bool,
}

/// Splits comma-separated free text into lower-cased, trimmed, non-empty terms.
fn split_terms(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn title_matches(job: &JobListing, keywords: &[String]) -> bool {
    let title = job.title.to_lowercase();
    keywords.iter().any(|k| title.contains(k.as_str()))
}

/// Overlap in either direction: "react" matches "React Native" and "node.js"
/// matches a preference of "node.js, aws".
fn skills_overlap(job: &JobListing, wanted: &[String]) -> bool {
    job.skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        wanted
            .iter()
            .any(|w| skill.contains(w.as_str()) || w.contains(skill.as_str()))
    })
}

pub fn compute_match_score(job: &JobListing, prefs: &JobPreferences) -> u32 {
    let mut score = 0;

    let keywords = split_terms(&prefs.role_keywords);
    if !keywords.is_empty() && title_matches(job, &keywords) {
        score += TITLE_KEYWORD_POINTS;
    }
    if prefs.locations.iter().any(|l| *l == job.location) {
        score += LOCATION_POINTS;
    }
    if prefs.modes.iter().any(|m| *m == job.mode) {
        score += MODE_POINTS;
    }
    if !prefs.experience.is_empty() && prefs.experience == job.experience {
        score += EXPERIENCE_POINTS;
    }
    let wanted = split_terms(&prefs.skills);
    if !wanted.is_empty() && skills_overlap(job, &wanted) {
        score += SKILL_OVERLAP_POINTS;
    }
    if job.posted_days_ago <= RECENT_DAYS {
        score += RECENCY_POINTS;
    }
    if job.source == BOOSTED_SOURCE {
        score += SOURCE_BOOST_POINTS;
    }

    score.min(MAX_MATCH_SCORE)
}

/// Scores every listing, preserving input order.
pub fn score_jobs(jobs: &[JobListing], prefs: &JobPreferences) -> Vec<MatchResult> {
    jobs.iter()
        .map(|job| {
            let score = compute_match_score(job, prefs);
            MatchResult {
                job_id: job.id.clone(),
                score,
                meets_threshold: score >= prefs.min_match_score,
            }
        })
        .collect()
}
