use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::checklist::ChecklistBlock;
use crate::analysis::company::CompanyIntel;
use crate::analysis::extractor::ExtractedSkills;
use crate::analysis::plan::PlanDay;
use crate::analysis::readiness::{compute_final_score, SkillConfidence};
use crate::analysis::rounds::InterviewRound;

/// One JD analysis. Everything except `skill_confidence_map`, `final_score`
/// and `updated_at` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub jd_text: String,
    pub extracted_skills: ExtractedSkills,
    pub round_mapping: Vec<InterviewRound>,
    pub checklist: Vec<ChecklistBlock>,
    pub plan_7_days: Vec<PlanDay>,
    pub questions: Vec<String>,
    pub company_intel: CompanyIntel,
    pub base_score: u32,
    #[serde(default)]
    pub skill_confidence_map: BTreeMap<String, SkillConfidence>,
    pub final_score: u32,
    pub updated_at: DateTime<Utc>,
}

/// The mutable subset of an [`Analysis`], merged by the record store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_confidence_map: Option<BTreeMap<String, SkillConfidence>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Analysis {
    /// Records `confidence` for `skill` and re-derives `final_score`.
    ///
    /// Returns the patch to persist, or `None` when `skill` was not extracted
    /// from this JD (the analysis is left untouched).
    pub fn set_confidence(
        &mut self,
        skill: &str,
        confidence: SkillConfidence,
        now: DateTime<Utc>,
    ) -> Option<AnalysisPatch> {
        if !self.extracted_skills.contains_skill(skill) {
            return None;
        }
        self.skill_confidence_map
            .insert(skill.to_string(), confidence);
        self.final_score = compute_final_score(
            self.base_score,
            &self.extracted_skills,
            &self.skill_confidence_map,
        );
        self.updated_at = now;

        Some(AnalysisPatch {
            skill_confidence_map: Some(self.skill_confidence_map.clone()),
            final_score: Some(self.final_score),
            updated_at: Some(now),
        })
    }

    /// Shallow-merges `patch` into this record. Fields absent from the patch keep
    /// their current value.
    pub fn merge(&mut self, patch: AnalysisPatch) {
        if let Some(map) = patch.skill_confidence_map {
            self.skill_confidence_map = map;
        }
        if let Some(score) = patch.final_score {
            self.final_score = score;
        }
        if let Some(at) = patch.updated_at {
            self.updated_at = at;
        }
    }
}
