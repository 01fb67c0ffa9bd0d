use std::sync::Arc;

use crate::config::Config;
use crate::store::{AnalysisStore, JobTrackerStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn AnalysisStore>,
    pub jobs: Arc<dyn JobTrackerStore>,
    pub config: Config,
}
