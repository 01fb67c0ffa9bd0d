use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::job::{ApplicationStatus, JobPreferences, PreferencesPatch};
use crate::store::jobs::JobTrackerStore;

#[derive(Default)]
struct TrackerState {
    preferences: JobPreferences,
    saved: Vec<String>,
    statuses: BTreeMap<String, ApplicationStatus>,
}

/// Process-local tracker state behind a single lock.
#[derive(Default)]
pub struct InMemoryJobTrackerStore {
    state: RwLock<TrackerState>,
}

impl InMemoryJobTrackerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobTrackerStore for InMemoryJobTrackerStore {
    async fn get_preferences(&self) -> Result<JobPreferences> {
        Ok(self.state.read().await.preferences.clone())
    }

    async fn update_preferences(&self, patch: PreferencesPatch) -> Result<JobPreferences> {
        let mut state = self.state.write().await;
        state.preferences.merge(patch);
        Ok(state.preferences.clone())
    }

    async fn toggle_saved(&self, job_id: &str) -> Result<bool> {
        let mut state = self.state.write().await;
        let saved = match state.saved.iter().position(|id| id == job_id) {
            Some(pos) => {
                state.saved.remove(pos);
                false
            }
            None => {
                state.saved.push(job_id.to_string());
                true
            }
        };
        debug!(job_id, saved, "Toggled saved job");
        Ok(saved)
    }

    async fn list_saved(&self) -> Result<Vec<String>> {
        Ok(self.state.read().await.saved.clone())
    }

    async fn set_status(&self, job_id: &str, status: ApplicationStatus) -> Result<()> {
        self.state
            .write()
            .await
            .statuses
            .insert(job_id.to_string(), status);
        Ok(())
    }

    async fn get_status(&self, job_id: &str) -> Result<ApplicationStatus> {
        Ok(self
            .state
            .read()
            .await
            .statuses
            .get(job_id)
            .copied()
            .unwrap_or_default())
    }

    async fn list_statuses(&self) -> Result<BTreeMap<String, ApplicationStatus>> {
        Ok(self.state.read().await.statuses.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_preferences_start_at_defaults_and_merge() {
        let store = InMemoryJobTrackerStore::new();
        assert_eq!(store.get_preferences().await.unwrap(), JobPreferences::default());

        store
            .update_preferences(PreferencesPatch {
                role_keywords: Some("backend".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        let prefs = store
            .update_preferences(PreferencesPatch {
                min_match_score: Some(60),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(prefs.role_keywords, "backend");
        assert_eq!(prefs.min_match_score, 60);
    }

    #[tokio::test]
    async fn test_toggle_saved_flips_and_keeps_order() {
        let store = InMemoryJobTrackerStore::new();
        assert!(store.toggle_saved("a").await.unwrap());
        assert!(store.toggle_saved("b").await.unwrap());
        assert!(store.toggle_saved("c").await.unwrap());
        assert!(!store.toggle_saved("b").await.unwrap());
        assert_eq!(store.list_saved().await.unwrap(), ["a", "c"]);
        assert!(store.toggle_saved("b").await.unwrap());
        assert_eq!(store.list_saved().await.unwrap(), ["a", "c", "b"]);
    }

    #[tokio::test]
    async fn test_status_defaults_to_not_applied() {
        let store = InMemoryJobTrackerStore::new();
        assert_eq!(
            store.get_status("unknown").await.unwrap(),
            ApplicationStatus::NotApplied
        );
        store.set_status("a", ApplicationStatus::Applied).await.unwrap();
        store.set_status("a", ApplicationStatus::Selected).await.unwrap();
        assert_eq!(store.get_status("a").await.unwrap(), ApplicationStatus::Selected);
        assert_eq!(store.list_statuses().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_preference_patches_all_land() {
        let store = Arc::new(InMemoryJobTrackerStore::new());
        let a = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .update_preferences(PreferencesPatch {
                        skills: Some("rust".into()),
                        ..Default::default()
                    })
                    .await
            })
        };
        let b = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .update_preferences(PreferencesPatch {
                        experience: Some("0-1".into()),
                        ..Default::default()
                    })
                    .await
            })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let prefs = store.get_preferences().await.unwrap();
        assert_eq!(prefs.skills, "rust");
        assert_eq!(prefs.experience, "0-1");
    }
}
