pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers;
use crate::jobs::handlers as job_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analyses",
            post(handlers::handle_create_analysis)
                .get(handlers::handle_list_analyses)
                .delete(handlers::handle_clear_analyses),
        )
        .route(
            "/api/v1/analyses/latest",
            get(handlers::handle_latest_analysis),
        )
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .route(
            "/api/v1/analyses/:id/confidence",
            patch(handlers::handle_set_confidence),
        )
        // Resume API
        .route(
            "/api/v1/resume/score",
            post(resume_handlers::handle_score_resume),
        )
        .route(
            "/api/v1/resume/bullets",
            post(resume_handlers::handle_check_bullets),
        )
        // Job tracker API
        .route(
            "/api/v1/jobs/preferences",
            get(job_handlers::handle_get_preferences).patch(job_handlers::handle_update_preferences),
        )
        .route("/api/v1/jobs/match", post(job_handlers::handle_match_jobs))
        .route("/api/v1/jobs/saved", get(job_handlers::handle_list_saved))
        .route(
            "/api/v1/jobs/saved/:job_id",
            post(job_handlers::handle_toggle_saved),
        )
        .route(
            "/api/v1/jobs/statuses",
            get(job_handlers::handle_list_statuses),
        )
        .route(
            "/api/v1/jobs/:job_id/status",
            get(job_handlers::handle_get_status).put(job_handlers::handle_set_status),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use serde_json::{json, Value};
    use tokio::sync::Barrier;
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::analysis::readiness::SkillConfidence;
    use crate::config::Config;
    use crate::models::analysis::{Analysis, AnalysisPatch};
    use crate::store::{
        AnalysisStore, ConfidenceUpdate, InMemoryAnalysisStore, InMemoryJobTrackerStore,
    };

    /// Holds each confidence update until the barrier has enough of them in flight.
    struct RendezvousStore {
        inner: InMemoryAnalysisStore,
        barrier: Barrier,
    }

    #[async_trait]
    impl AnalysisStore for RendezvousStore {
        async fn save(&self, analysis: &Analysis) -> Result<()> {
            self.inner.save(analysis).await
        }

        async fn list_all(&self) -> Result<Vec<Analysis>> {
            self.inner.list_all().await
        }

        async fn get_by_id(&self, id: Uuid) -> Result<Option<Analysis>> {
            self.inner.get_by_id(id).await
        }

        async fn get_most_recent(&self) -> Result<Option<Analysis>> {
            self.inner.get_most_recent().await
        }

        async fn merge_update(&self, id: Uuid, patch: AnalysisPatch) -> Result<bool> {
            self.inner.merge_update(id, patch).await
        }

        async fn update_confidence(
            &self,
            id: Uuid,
            skill: &str,
            confidence: SkillConfidence,
            now: DateTime<Utc>,
        ) -> Result<ConfidenceUpdate> {
            self.barrier.wait().await;
            self.inner.update_confidence(id, skill, confidence, now).await
        }

        async fn clear_all(&self) -> Result<()> {
            self.inner.clear_all().await
        }
    }

    const LONG_JD: &str = "We are hiring a backend engineer to build React dashboards and \
        Node.js services on top of PostgreSQL. You will design REST APIs, deploy with \
        Docker on AWS, write tests with Jest, and work through DSA heavy interviews. \
        Strong ownership, clear writing and a bias for shipping are expected from day one.";

    fn app() -> Router {
        build_router(AppState {
            store: Arc::new(InMemoryAnalysisStore::default()),
            jobs: Arc::new(InMemoryJobTrackerStore::new()),
            config: Config::default(),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            // axum's own extractor rejections are plain text
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    async fn create(app: &Router, company: &str) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/analyses",
            Some(json!({ "jd_text": LONG_JD, "company": company, "role": "Backend Engineer" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_then_fetch_by_id_and_latest() {
        let app = app();
        let created = create(&app, "Amazon").await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["final_score"], created["base_score"]);
        assert_eq!(created["company_intel"]["size"], "Enterprise");

        let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/analyses/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, latest) = send(&app, Method::GET, "/api/v1/analyses/latest", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(latest["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_blank_and_short_jd_rejected() {
        let app = app();
        let (status, body) = send(&app, Method::POST, "/api/v1/analyses", Some(json!({ "jd_text": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/analyses",
            Some(json!({ "jd_text": "React developer" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/analyses",
            Some(json!({ "jd_text": "React developer", "acknowledge_short_jd": true })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["company"], "Unknown Company");
        assert_eq!(body["role"], "Software Engineer");
    }

    #[tokio::test]
    async fn test_confidence_toggle_updates_score_and_persists() {
        let app = app();
        let created = create(&app, "").await;
        let id = created["id"].as_str().unwrap();
        let uri = format!("/api/v1/analyses/{id}/confidence");

        let (status, updated) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "skill": "React", "confidence": "know" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["skill_confidence_map"]["React"], "know");
        assert_eq!(updated["base_score"], created["base_score"]);

        let (_, fetched) = send(&app, Method::GET, &format!("/api/v1/analyses/{id}"), None).await;
        assert_eq!(fetched["final_score"], updated["final_score"]);
        assert_eq!(fetched["skill_confidence_map"]["React"], "know");

        // Toggling back and forth lands on the same score.
        let (_, practice) = send(&app, Method::PATCH, &uri, Some(json!({ "skill": "React", "confidence": "practice" }))).await;
        let (_, know_again) = send(&app, Method::PATCH, &uri, Some(json!({ "skill": "React", "confidence": "know" }))).await;
        assert_eq!(know_again["final_score"], updated["final_score"]);
        assert_ne!(practice["final_score"], updated["final_score"]);
    }

    #[tokio::test]
    async fn test_confidence_for_unknown_skill_or_record() {
        let app = app();
        let created = create(&app, "").await;
        let id = created["id"].as_str().unwrap();

        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/analyses/{id}/confidence"),
            Some(json!({ "skill": "Haskell", "confidence": "know" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let missing = uuid::Uuid::new_v4();
        let (status, _) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/analyses/{missing}/confidence"),
            Some(json!({ "skill": "React", "confidence": "know" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_simultaneous_toggles_on_different_skills_both_persist() {
        let app = build_router(AppState {
            store: Arc::new(RendezvousStore {
                inner: InMemoryAnalysisStore::default(),
                barrier: Barrier::new(2),
            }),
            jobs: Arc::new(InMemoryJobTrackerStore::new()),
            config: Config::default(),
        });
        let created = create(&app, "").await;
        let id = created["id"].as_str().unwrap();
        let uri = format!("/api/v1/analyses/{id}/confidence");

        let (react, docker) = tokio::join!(
            send(&app, Method::PATCH, &uri, Some(json!({ "skill": "React", "confidence": "know" }))),
            send(&app, Method::PATCH, &uri, Some(json!({ "skill": "Docker", "confidence": "know" }))),
        );
        assert_eq!(react.0, StatusCode::OK);
        assert_eq!(docker.0, StatusCode::OK);

        let (_, stored) = send(&app, Method::GET, &format!("/api/v1/analyses/{id}"), None).await;
        assert_eq!(stored["skill_confidence_map"]["React"], "know");
        assert_eq!(stored["skill_confidence_map"]["Docker"], "know");

        let total: i64 = stored["extracted_skills"]
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_array().unwrap().len() as i64)
            .sum();
        let base = stored["base_score"].as_i64().unwrap();
        let expected = (base + 2 * 2 - 2 * (total - 2)).clamp(0, 100);
        assert_eq!(stored["final_score"].as_i64().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_list_and_clear_history() {
        let app = app();
        let first = create(&app, "Infosys").await;
        let second = create(&app, "Amazon").await;

        let (status, list) = send(&app, Method::GET, "/api/v1/analyses", None).await;
        assert_eq!(status, StatusCode::OK);
        let list = list.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["id"], second["id"]);
        assert_eq!(list[1]["id"], first["id"]);

        let (status, _) = send(&app, Method::DELETE, "/api/v1/analyses", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&app, Method::GET, "/api/v1/analyses", None).await;
        assert!(list.as_array().unwrap().is_empty());
        let (status, _) = send(&app, Method::GET, "/api/v1/analyses/latest", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_endpoints() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/resume/score",
            Some(json!({ "personal": { "name": "Asha Rao", "email": "asha@example.com" } })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 20);
        assert_eq!(body["improvements"].as_array().unwrap().len(), 3);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/resume/bullets",
            Some(json!({ "description": "- Worked on the billing service\n- Reduced p99 latency by 40%" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let warnings = body["warnings"].as_array().unwrap();
        assert!(warnings.iter().all(|w| w["line"] == 1));
        assert!(!warnings.is_empty());
    }

    fn listing(id: &str, title: &str, days: u32, source: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "company": "Quillbyte",
            "location": "Pune",
            "mode": "Remote",
            "experience": "0-1",
            "skills": ["Rust", "SQL"],
            "posted_days_ago": days,
            "source": source
        })
    }

    #[tokio::test]
    async fn test_job_preferences_patch_and_match() {
        let app = app();
        let (status, prefs) = send(&app, Method::GET, "/api/v1/jobs/preferences", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(prefs["min_match_score"], 40);

        let (status, prefs) = send(
            &app,
            Method::PATCH,
            "/api/v1/jobs/preferences",
            Some(json!({ "role_keywords": "backend", "locations": ["Pune"], "skills": "rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(prefs["role_keywords"], "backend");
        assert_eq!(prefs["min_match_score"], 40);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/match",
            Some(json!({
                "jobs": [
                    listing("a", "Backend Engineer", 0, "LinkedIn"),
                    listing("b", "Designer", 10, "Indeed")
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results[0]["job_id"], "a");
        assert_eq!(results[0]["score"], 25 + 15 + 15 + 5 + 5);
        assert_eq!(results[0]["meets_threshold"], true);
        assert_eq!(results[1]["score"], 15 + 15);
        assert_eq!(results[1]["meets_threshold"], false);

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/match",
            Some(json!({
                "jobs": [
                    listing("a", "Backend Engineer", 0, "LinkedIn"),
                    listing("b", "Designer", 10, "Indeed")
                ],
                "only_matching": true
            })),
        )
        .await;
        assert_eq!(body["results"].as_array().unwrap().len(), 1);

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/v1/jobs/match",
            Some(json!({
                "jobs": [listing("a", "Backend Engineer", 0, "LinkedIn")],
                "filter": { "keyword": "designer" }
            })),
        )
        .await;
        assert!(body["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_job_preferences_reject_threshold_over_100() {
        let (status, _) = send(
            &app(),
            Method::PATCH,
            "/api/v1/jobs/preferences",
            Some(json!({ "min_match_score": 101 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_saved_jobs_toggle() {
        let app = app();
        let (_, body) = send(&app, Method::POST, "/api/v1/jobs/saved/job-7", None).await;
        assert_eq!(body["saved"], true);
        let (_, body) = send(&app, Method::GET, "/api/v1/jobs/saved", None).await;
        assert_eq!(body["job_ids"], json!(["job-7"]));

        let (_, body) = send(&app, Method::POST, "/api/v1/jobs/saved/job-7", None).await;
        assert_eq!(body["saved"], false);
        let (_, body) = send(&app, Method::GET, "/api/v1/jobs/saved", None).await;
        assert_eq!(body["job_ids"], json!([]));
    }

    #[tokio::test]
    async fn test_application_status_lifecycle() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/v1/jobs/job-3/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Not Applied");

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/jobs/job-3/status",
            Some(json!({ "status": "Applied" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Applied");

        let (_, body) = send(&app, Method::GET, "/api/v1/jobs/statuses", None).await;
        assert_eq!(body, json!({ "job-3": "Applied" }));

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/jobs/job-3/status",
            Some(json!({ "status": "Ghosted" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
