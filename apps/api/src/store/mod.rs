//! Record store for analyses: a capped, most-recent-first history.
//!
//! The engine never touches storage; handlers call `save` once at creation and
//! `update_confidence` on every confidence toggle. `AppState` carries an
//! `Arc<dyn AnalysisStore>`, chosen at startup from config.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analysis::readiness::SkillConfidence;
use crate::models::analysis::{Analysis, AnalysisPatch};

pub mod jobs;
pub mod memory;
pub mod postgres;

pub use jobs::{InMemoryJobTrackerStore, JobTrackerStore, PgJobTrackerStore};
pub use memory::InMemoryAnalysisStore;
pub use postgres::PgAnalysisStore;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Outcome of [`AnalysisStore::update_confidence`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfidenceUpdate {
    Updated(Box<Analysis>),
    /// The skill was not extracted from this analysis; nothing was written.
    UnknownSkill,
    NotFound,
}

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Inserts at the front of the history, evicting the oldest beyond the cap.
    async fn save(&self, analysis: &Analysis) -> Result<()>;

    /// Most recent first, at most the configured cap.
    async fn list_all(&self) -> Result<Vec<Analysis>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Analysis>>;

    async fn get_most_recent(&self) -> Result<Option<Analysis>>;

    /// Merges `patch` into the stored record. `Ok(false)` when `id` is unknown.
    async fn merge_update(&self, id: Uuid, patch: AnalysisPatch) -> Result<bool>;

    /// Records one confidence toggle and re-derives `final_score` from the
    /// stored record, all under the record's write lock. Concurrent toggles on
    /// different skills of the same analysis never overwrite each other.
    async fn update_confidence(
        &self,
        id: Uuid,
        skill: &str,
        confidence: SkillConfidence,
        now: DateTime<Utc>,
    ) -> Result<ConfidenceUpdate>;

    async fn clear_all(&self) -> Result<()>;
}
