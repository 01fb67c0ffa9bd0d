//! Job tracker state: one preferences record, the saved-job set and the
//! per-job application status map. Listings themselves are never stored.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::job::{ApplicationStatus, JobPreferences, PreferencesPatch};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryJobTrackerStore;
pub use postgres::PgJobTrackerStore;

#[async_trait]
pub trait JobTrackerStore: Send + Sync {
    /// Stored preferences, or the defaults when none were ever written.
    async fn get_preferences(&self) -> Result<JobPreferences>;

    /// Shallow-merges `patch` under a write lock and returns the result.
    async fn update_preferences(&self, patch: PreferencesPatch) -> Result<JobPreferences>;

    /// Flips the saved flag for `job_id`. Returns `true` when it is now saved.
    async fn toggle_saved(&self, job_id: &str) -> Result<bool>;

    /// Saved job ids, oldest save first.
    async fn list_saved(&self) -> Result<Vec<String>>;

    async fn set_status(&self, job_id: &str, status: ApplicationStatus) -> Result<()>;

    /// `NotApplied` for jobs that never had a status set.
    async fn get_status(&self, job_id: &str) -> Result<ApplicationStatus>;

    async fn list_statuses(&self) -> Result<BTreeMap<String, ApplicationStatus>>;
}
