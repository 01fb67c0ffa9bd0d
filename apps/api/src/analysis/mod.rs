// JD analysis engine.
// Implements: skill extraction, readiness scoring, company classification, round mapping,
// plan / checklist / question generation, and the orchestrator that composes them.
// Everything here is synchronous and pure; persistence lives in `store`.

pub mod checklist;
pub mod company;
pub mod extractor;
pub mod handlers;
pub mod orchestrator;
pub mod plan;
pub mod questions;
pub mod readiness;
pub mod rounds;
pub mod validation;
pub mod vocabulary;

pub use orchestrator::{analyze_jd, analyze_jd_at, AnalysisInput};
