//! Readiness scoring: the fixed-at-creation base score and the live final score.
//!
//! base  = 35 + 5·populated_categories + 10·has_company + 10·has_role + 10·(len > 800)
//! final = clamp(base + Σ per-skill confidence modifier, 0, 100)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::ExtractedSkills;

pub const BASE_SCORE: i32 = 35;
pub const CATEGORY_BONUS: i32 = 5;
pub const COMPANY_BONUS: i32 = 10;
pub const ROLE_BONUS: i32 = 10;
pub const LONG_JD_BONUS: i32 = 10;
/// JD length (in characters) that must be exceeded for the length bonus.
pub const LONG_JD_THRESHOLD: usize = 800;

pub const KNOW_MODIFIER: i32 = 2;
pub const PRACTICE_MODIFIER: i32 = -2;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Self-assessed confidence for one extracted skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillConfidence {
    Know,
    #[default]
    Practice,
}

impl SkillConfidence {
    pub fn modifier(self) -> i32 {
        match self {
            SkillConfidence::Know => KNOW_MODIFIER,
            SkillConfidence::Practice => PRACTICE_MODIFIER,
        }
    }
}

/// Computes the base readiness score. Pure: identical inputs, identical score.
pub fn compute_base_score(
    skills: &ExtractedSkills,
    company: &str,
    role: &str,
    jd_text: &str,
) -> u32 {
    let mut score = BASE_SCORE;
    score += CATEGORY_BONUS * skills.populated_vocabulary_categories() as i32;
    if !company.trim().is_empty() {
        score += COMPANY_BONUS;
    }
    if !role.trim().is_empty() {
        score += ROLE_BONUS;
    }
    if jd_text.chars().count() > LONG_JD_THRESHOLD {
        score += LONG_JD_BONUS;
    }
    clamp_score(score)
}

/// Re-derives the final score from the base score and the confidence map.
///
/// Every extracted skill contributes; skills absent from the map count as
/// `Practice`. Order-independent and idempotent.
pub fn compute_final_score(
    base_score: u32,
    skills: &ExtractedSkills,
    confidence: &BTreeMap<String, SkillConfidence>,
) -> u32 {
    let delta: i32 = skills
        .all_skills()
        .map(|skill| {
            confidence
                .get(skill)
                .copied()
                .unwrap_or_default()
                .modifier()
        })
        .sum();
    clamp_score(base_score as i32 + delta)
}

fn clamp_score(score: i32) -> u32 {
    score.clamp(MIN_SCORE, MAX_SCORE) as u32
}
