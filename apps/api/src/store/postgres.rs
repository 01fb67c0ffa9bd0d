use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::readiness::SkillConfidence;
use crate::models::analysis::{Analysis, AnalysisPatch};
use crate::store::{AnalysisStore, ConfidenceUpdate};

/// Postgres-backed history. Each analysis is one JSONB row; the cap is enforced
/// on every save.
pub struct PgAnalysisStore {
    pool: PgPool,
    limit: i64,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool, limit: usize) -> Self {
        Self {
            pool,
            limit: limit.max(1) as i64,
        }
    }
}

const LIST_QUERY: &str =
    "SELECT id, record FROM analyses ORDER BY created_at DESC, id DESC LIMIT $1";
const MOST_RECENT_QUERY: &str =
    "SELECT id, record FROM analyses ORDER BY created_at DESC, id DESC LIMIT 1";

/// Decodes stored rows, dropping any that no longer match the record shape.
fn decode_rows(rows: Vec<(Uuid, Value)>) -> Vec<Analysis> {
    let total = rows.len();
    let decoded: Vec<Analysis> = rows
        .into_iter()
        .filter_map(|(id, record)| match serde_json::from_value::<Analysis>(record) {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!(%id, "Skipping corrupted analysis row: {e}");
                None
            }
        })
        .collect();
    if decoded.len() < total {
        warn!(
            skipped = total - decoded.len(),
            "Some history entries were corrupted and filtered out"
        );
    }
    decoded
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn save(&self, analysis: &Analysis) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO analyses (id, created_at, updated_at, record)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
                SET updated_at = EXCLUDED.updated_at, record = EXCLUDED.record
            "#,
        )
        .bind(analysis.id)
        .bind(analysis.created_at)
        .bind(analysis.updated_at)
        .bind(Json(analysis))
        .execute(&mut *tx)
        .await
        .context("Failed to insert analysis")?;

        let evicted = sqlx::query(
            r#"
            DELETE FROM analyses
            WHERE id NOT IN (
                SELECT id FROM analyses ORDER BY created_at DESC, id DESC LIMIT $1
            )
            "#,
        )
        .bind(self.limit)
        .execute(&mut *tx)
        .await
        .context("Failed to enforce history cap")?
        .rows_affected();

        tx.commit().await?;

        info!(id = %analysis.id, evicted, "Analysis saved");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Analysis>> {
        let rows: Vec<(Uuid, Value)> = sqlx::query_as(LIST_QUERY)
            .bind(self.limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(decode_rows(rows))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Analysis>> {
        let row: Option<(Uuid, Value)> =
            sqlx::query_as("SELECT id, record FROM analyses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.and_then(|r| decode_rows(vec![r]).pop()))
    }

    async fn get_most_recent(&self) -> Result<Option<Analysis>> {
        let row: Option<(Uuid, Value)> = sqlx::query_as(MOST_RECENT_QUERY)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.and_then(|r| decode_rows(vec![r]).pop()))
    }

    async fn merge_update(&self, id: Uuid, patch: AnalysisPatch) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(Value,)> =
            sqlx::query_as("SELECT record FROM analyses WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((record,)) = row else {
            return Ok(false);
        };

        let mut analysis: Analysis = serde_json::from_value(record)
            .with_context(|| format!("Stored analysis {id} is corrupted"))?;
        analysis.merge(patch);

        sqlx::query("UPDATE analyses SET updated_at = $1, record = $2 WHERE id = $3")
            .bind(analysis.updated_at)
            .bind(Json(&analysis))
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn update_confidence(
        &self,
        id: Uuid,
        skill: &str,
        confidence: SkillConfidence,
        now: DateTime<Utc>,
    ) -> Result<ConfidenceUpdate> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(Value,)> =
            sqlx::query_as("SELECT record FROM analyses WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some((record,)) = row else {
            return Ok(ConfidenceUpdate::NotFound);
        };

        let mut analysis: Analysis = serde_json::from_value(record)
            .with_context(|| format!("Stored analysis {id} is corrupted"))?;
        if analysis.set_confidence(skill, confidence, now).is_none() {
            return Ok(ConfidenceUpdate::UnknownSkill);
        }

        sqlx::query("UPDATE analyses SET updated_at = $1, record = $2 WHERE id = $3")
            .bind(analysis.updated_at)
            .bind(Json(&analysis))
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to persist confidence toggle")?;

        tx.commit().await?;
        Ok(ConfidenceUpdate::Updated(Box::new(analysis)))
    }

    async fn clear_all(&self) -> Result<()> {
        let cleared = sqlx::query("DELETE FROM analyses")
            .execute(&self.pool)
            .await?
            .rows_affected();
        info!(cleared, "Analysis history cleared");
        Ok(())
    }
}
