use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::readiness::SkillConfidence;
use crate::models::analysis::{Analysis, AnalysisPatch};
use crate::store::{AnalysisStore, ConfidenceUpdate, DEFAULT_HISTORY_LIMIT};

/// Process-local store. Front of the deque is the newest record.
pub struct InMemoryAnalysisStore {
    records: RwLock<VecDeque<Analysis>>,
    limit: usize,
}

impl InMemoryAnalysisStore {
    pub fn new(limit: usize) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            limit: limit.max(1),
        }
    }
}

impl Default for InMemoryAnalysisStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[async_trait]
impl AnalysisStore for InMemoryAnalysisStore {
    async fn save(&self, analysis: &Analysis) -> Result<()> {
        let mut records = self.records.write().await;
        records.retain(|a| a.id != analysis.id);
        records.push_front(analysis.clone());
        records.truncate(self.limit);
        debug!(id = %analysis.id, len = records.len(), "Saved analysis");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Analysis>> {
        Ok(self.records.read().await.iter().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Analysis>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn get_most_recent(&self) -> Result<Option<Analysis>> {
        Ok(self.records.read().await.front().cloned())
    }

    async fn merge_update(&self, id: Uuid, patch: AnalysisPatch) -> Result<bool> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|a| a.id == id) {
            Some(record) => {
                record.merge(patch);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_confidence(
        &self,
        id: Uuid,
        skill: &str,
        confidence: SkillConfidence,
        now: DateTime<Utc>,
    ) -> Result<ConfidenceUpdate> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|a| a.id == id) else {
            return Ok(ConfidenceUpdate::NotFound);
        };
        Ok(match record.set_confidence(skill, confidence, now) {
            Some(_) => ConfidenceUpdate::Updated(Box::new(record.clone())),
            None => ConfidenceUpdate::UnknownSkill,
        })
    }

    async fn clear_all(&self) -> Result<()> {
        self.records.write().await.clear();
        Ok(())
    }
}
