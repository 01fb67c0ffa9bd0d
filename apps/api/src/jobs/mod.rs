// Job tracker: match scoring of caller-supplied listings against stored
// preferences, plus saved jobs and application statuses.

pub mod filter;
pub mod handlers;
pub mod match_score;

pub use filter::JobFilter;
pub use match_score::{compute_match_score, score_jobs, MatchResult};
