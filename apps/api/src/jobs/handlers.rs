use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::filter::JobFilter;
use crate::jobs::match_score::{score_jobs, MatchResult, MAX_MATCH_SCORE};
use crate::models::job::{ApplicationStatus, JobListing, JobPreferences, PreferencesPatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub jobs: Vec<JobListing>,
    #[serde(default)]
    pub filter: JobFilter,
    /// Drop listings scoring below the stored `min_match_score`.
    #[serde(default)]
    pub only_matching: bool,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub min_match_score: u32,
    pub results: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct SavedJobsResponse {
    pub job_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedToggleResponse {
    pub job_id: String,
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub job_id: String,
    pub status: ApplicationStatus,
}

/// GET /api/v1/jobs/preferences
pub async fn handle_get_preferences(
    State(state): State<AppState>,
) -> Result<Json<JobPreferences>, AppError> {
    Ok(Json(state.jobs.get_preferences().await?))
}

/// PATCH /api/v1/jobs/preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Json(patch): Json<PreferencesPatch>,
) -> Result<Json<JobPreferences>, AppError> {
    if patch.min_match_score.is_some_and(|s| s > MAX_MATCH_SCORE) {
        return Err(AppError::Validation(format!(
            "min_match_score must be between 0 and {MAX_MATCH_SCORE}"
        )));
    }
    Ok(Json(state.jobs.update_preferences(patch).await?))
}

/// POST /api/v1/jobs/match
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let prefs = state.jobs.get_preferences().await?;
    let candidates: Vec<JobListing> = req.filter.apply(&req.jobs).into_iter().cloned().collect();
    let mut results = score_jobs(&candidates, &prefs);
    if req.only_matching {
        results.retain(|r| r.meets_threshold);
    }

    info!(
        submitted = req.jobs.len(),
        scored = results.len(),
        "Scored job listings"
    );
    Ok(Json(MatchResponse {
        min_match_score: prefs.min_match_score,
        results,
    }))
}

/// GET /api/v1/jobs/saved
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<SavedJobsResponse>, AppError> {
    Ok(Json(SavedJobsResponse {
        job_ids: state.jobs.list_saved().await?,
    }))
}

/// POST /api/v1/jobs/saved/:job_id
pub async fn handle_toggle_saved(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<SavedToggleResponse>, AppError> {
    let saved = state.jobs.toggle_saved(&job_id).await?;
    Ok(Json(SavedToggleResponse { job_id, saved }))
}

/// GET /api/v1/jobs/statuses
pub async fn handle_list_statuses(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, ApplicationStatus>>, AppError> {
    Ok(Json(state.jobs.list_statuses().await?))
}

/// GET /api/v1/jobs/:job_id/status
pub async fn handle_get_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let status = state.jobs.get_status(&job_id).await?;
    Ok(Json(StatusResponse { job_id, status }))
}

/// PUT /api/v1/jobs/:job_id/status
pub async fn handle_set_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(req): Json<StatusRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    state.jobs.set_status(&job_id, req.status).await?;
    info!(%job_id, status = req.status.as_str(), "Application status updated");
    Ok(Json(StatusResponse {
        job_id,
        status: req.status,
    }))
}
