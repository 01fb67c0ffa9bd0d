//! Axum route handlers for the resume scoring API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;
use crate::resume::ats_score::{score_resume, ScoreResult};
use crate::resume::bullets::{analyze_bullets, BulletWarning};

#[derive(Debug, Deserialize)]
pub struct BulletCheckRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct BulletCheckResponse {
    pub warnings: Vec<BulletWarning>,
}

/// POST /api/v1/resume/score
pub async fn handle_score_resume(Json(record): Json<ResumeRecord>) -> Json<ScoreResult> {
    Json(score_resume(&record))
}

/// POST /api/v1/resume/bullets
pub async fn handle_check_bullets(
    Json(request): Json<BulletCheckRequest>,
) -> Json<BulletCheckResponse> {
    Json(BulletCheckResponse {
        warnings: analyze_bullets(&request.description),
    })
}
