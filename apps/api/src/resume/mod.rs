// Resume scoring engine.
// Implements: ATS readiness score with ranked improvements, and per-line bullet checks.
// Both share the action-verb vocabulary in `verbs`.

pub mod ats_score;
pub mod bullets;
pub mod handlers;
pub mod verbs;
