use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::models::job::{ApplicationStatus, JobPreferences, PreferencesPatch};
use crate::store::jobs::JobTrackerStore;

/// The preferences table holds a single row under this key.
const PREFERENCES_ROW: i16 = 1;

pub struct PgJobTrackerStore {
    pool: PgPool,
}

impl PgJobTrackerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn decode_preferences(record: Value) -> JobPreferences {
    serde_json::from_value(record).unwrap_or_else(|e| {
        warn!("Stored job preferences are corrupted, using defaults: {e}");
        JobPreferences::default()
    })
}

fn decode_status(job_id: &str, raw: &str) -> Option<ApplicationStatus> {
    let status = ApplicationStatus::parse(raw);
    if status.is_none() {
        warn!(job_id, raw, "Skipping unknown application status");
    }
    status
}

#[async_trait]
impl JobTrackerStore for PgJobTrackerStore {
    async fn get_preferences(&self) -> Result<JobPreferences> {
        let row: Option<(Value,)> =
            sqlx::query_as("SELECT record FROM job_preferences WHERE id = $1")
                .bind(PREFERENCES_ROW)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row
            .map(|(record,)| decode_preferences(record))
            .unwrap_or_default())
    }

    async fn update_preferences(&self, patch: PreferencesPatch) -> Result<JobPreferences> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO job_preferences (id, record, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(PREFERENCES_ROW)
        .bind(Json(JobPreferences::default()))
        .execute(&mut *tx)
        .await?;

        let (record,): (Value,) =
            sqlx::query_as("SELECT record FROM job_preferences WHERE id = $1 FOR UPDATE")
                .bind(PREFERENCES_ROW)
                .fetch_one(&mut *tx)
                .await?;

        let mut prefs = decode_preferences(record);
        prefs.merge(patch);

        sqlx::query("UPDATE job_preferences SET record = $1, updated_at = NOW() WHERE id = $2")
            .bind(Json(&prefs))
            .bind(PREFERENCES_ROW)
            .execute(&mut *tx)
            .await
            .context("Failed to update job preferences")?;

        tx.commit().await?;
        Ok(prefs)
    }

    async fn toggle_saved(&self, job_id: &str) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        // Serializes toggles of the same id, including ids not saved yet.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(job_id)
            .execute(&mut *tx)
            .await?;

        let removed = sqlx::query("DELETE FROM saved_jobs WHERE job_id = $1")
            .bind(job_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            sqlx::query("INSERT INTO saved_jobs (job_id) VALUES ($1)")
                .bind(job_id)
                .execute(&mut *tx)
                .await
                .context("Failed to save job")?;
        }

        tx.commit().await?;

        let saved = removed == 0;
        info!(job_id, saved, "Toggled saved job");
        Ok(saved)
    }

    async fn list_saved(&self) -> Result<Vec<String>> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT job_id FROM saved_jobs ORDER BY saved_seq ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    async fn set_status(&self, job_id: &str, status: ApplicationStatus) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO job_statuses (job_id, status, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (job_id) DO UPDATE
                SET status = EXCLUDED.status, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(job_id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .context("Failed to set application status")?;
        Ok(())
    }

    async fn get_status(&self, job_id: &str) -> Result<ApplicationStatus> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT status FROM job_statuses WHERE job_id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row
            .and_then(|(raw,)| decode_status(job_id, &raw))
            .unwrap_or_default())
    }

    async fn list_statuses(&self) -> Result<BTreeMap<String, ApplicationStatus>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT job_id, status FROM job_statuses")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .filter_map(|(job_id, raw)| decode_status(&job_id, &raw).map(|s| (job_id, s)))
            .collect())
    }
}
