//! Orchestrator: the single entry point that turns `(jd_text, company, role)`
//! into a complete [`Analysis`] record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::checklist::generate_checklist;
use crate::analysis::company::classify_company;
use crate::analysis::extractor::extract_skills;
use crate::analysis::plan::generate_plan;
use crate::analysis::questions::generate_questions;
use crate::analysis::readiness::compute_base_score;
use crate::analysis::rounds::map_rounds;
use crate::models::analysis::Analysis;

pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const DEFAULT_ROLE: &str = "Software Engineer";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisInput {
    pub jd_text: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
}

/// Analyzes a JD with a fresh time-ordered id and the current time.
pub fn analyze_jd(input: &AnalysisInput) -> Analysis {
    analyze_jd_at(input, Uuid::now_v7(), Utc::now())
}

/// Analyzes a JD with a caller-supplied id and timestamp.
///
/// Never fails: input validation (empty or short JD) belongs to the caller.
pub fn analyze_jd_at(input: &AnalysisInput, id: Uuid, now: DateTime<Utc>) -> Analysis {
    let extracted_skills = extract_skills(&input.jd_text);
    let base_score =
        compute_base_score(&extracted_skills, &input.company, &input.role, &input.jd_text);
    let company_intel = classify_company(&input.company);
    let round_mapping = map_rounds(company_intel.size);
    let plan_7_days = generate_plan(&extracted_skills);
    let checklist = generate_checklist(&extracted_skills);
    let questions = generate_questions(&extracted_skills);

    info!(
        %id,
        base_score,
        skills = extracted_skills.total(),
        size = ?company_intel.size,
        "JD analysis complete"
    );

    Analysis {
        id,
        created_at: now,
        company: display_or(&input.company, UNKNOWN_COMPANY),
        role: display_or(&input.role, DEFAULT_ROLE),
        jd_text: input.jd_text.clone(),
        extracted_skills,
        round_mapping,
        checklist,
        plan_7_days,
        questions,
        company_intel,
        base_score,
        skill_confidence_map: BTreeMap::new(),
        final_score: base_score,
        updated_at: now,
    }
}

fn display_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
