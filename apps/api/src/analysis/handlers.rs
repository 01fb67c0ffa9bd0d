use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::orchestrator::{analyze_jd, AnalysisInput};
use crate::analysis::readiness::SkillConfidence;
use crate::analysis::validation::{validate_jd, JdQuality};
use crate::errors::AppError;
use crate::models::analysis::Analysis;
use crate::state::AppState;
use crate::store::ConfidenceUpdate;

#[derive(Debug, Deserialize)]
pub struct CreateAnalysisRequest {
    pub jd_text: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub acknowledge_short_jd: bool,
}

#[derive(Debug, Deserialize)]
pub struct ConfidenceRequest {
    pub skill: String,
    pub confidence: SkillConfidence,
}

/// POST /api/v1/analyses
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    Json(req): Json<CreateAnalysisRequest>,
) -> Result<(StatusCode, Json<Analysis>), AppError> {
    let quality = validate_jd(
        &req.jd_text,
        req.acknowledge_short_jd,
        state.config.short_jd_threshold,
    )?;
    if quality == JdQuality::Short {
        warn!(
            chars = req.jd_text.chars().count(),
            "Analyzing short JD after acknowledgement"
        );
    }

    let analysis = analyze_jd(&AnalysisInput {
        jd_text: req.jd_text,
        company: req.company,
        role: req.role,
    });
    state.store.save(&analysis).await?;

    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<Analysis>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /api/v1/analyses/latest
pub async fn handle_latest_analysis(
    State(state): State<AppState>,
) -> Result<Json<Analysis>, AppError> {
    state
        .store
        .get_most_recent()
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No analyses yet".to_string()))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Analysis>, AppError> {
    state
        .store
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// PATCH /api/v1/analyses/:id/confidence
pub async fn handle_set_confidence(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ConfidenceRequest>,
) -> Result<Json<Analysis>, AppError> {
    match state
        .store
        .update_confidence(id, &req.skill, req.confidence, Utc::now())
        .await?
    {
        ConfidenceUpdate::Updated(analysis) => {
            info!(%id, skill = %req.skill, final_score = analysis.final_score, "Skill confidence updated");
            Ok(Json(*analysis))
        }
        ConfidenceUpdate::UnknownSkill => Err(AppError::Validation(format!(
            "'{}' is not a skill in this analysis",
            req.skill
        ))),
        ConfidenceUpdate::NotFound => Err(AppError::NotFound(format!("Analysis {id} not found"))),
    }
}

/// DELETE /api/v1/analyses
pub async fn handle_clear_analyses(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.store.clear_all().await?;
    info!("Analysis history cleared");
    Ok(StatusCode::NO_CONTENT)
}
